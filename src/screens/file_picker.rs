use ratatui::{layout::Rect, prelude::Frame};

use super::chrome;
use crate::ui::help::help_file_picker;
use crate::ui::style::Theme;
use crate::wizard::WizardController;

pub fn draw(f: &mut Frame<'_>, size: Rect, w: &WizardController, theme: &Theme) {
    let browser = w.source_browser();
    let dir = format!("Directory: {}", browser.current_path().display());
    let middle = chrome(
        f,
        size,
        theme,
        "Select the file holding your secret",
        &[
            dir.as_str(),
            "A .yaml/.yml file can be read as key/value pairs; any other file becomes the value of a single key.",
        ],
        help_file_picker(theme),
    );
    browser.draw(f, middle, theme);
}
