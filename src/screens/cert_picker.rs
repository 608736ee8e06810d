use ratatui::{layout::Rect, prelude::Frame};

use super::chrome;
use crate::ui::help::help_cert_picker;
use crate::ui::style::Theme;
use crate::wizard::WizardController;

pub fn draw(f: &mut Frame<'_>, size: Rect, w: &WizardController, theme: &Theme) {
    let browser = w.cert_browser();
    let dir = format!("Directory: {}", browser.current_path().display());
    let middle = chrome(
        f,
        size,
        theme,
        "Select the certificate to seal the secret with",
        &[
            dir.as_str(),
            "Picking a certificate runs kubeseal on the manifest. Press s to write the plain secret instead.",
        ],
        help_cert_picker(theme),
    );
    browser.draw(f, middle, theme);
}
