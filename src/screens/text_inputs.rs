use ratatui::{
    layout::{Margin, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::chrome;
use crate::ui::help::help_text_inputs;
use crate::ui::style::Theme;
use crate::wizard::WizardController;

pub fn draw(f: &mut Frame<'_>, size: Rect, w: &WizardController, theme: &Theme) {
    let selected = w
        .selected_file()
        .map(|p| format!("Selected file: {}", p.display()))
        .unwrap_or_default();
    let mode = w.file_mode().map(|m| format!("Mode: {m}")).unwrap_or_default();
    let middle = chrome(
        f,
        size,
        theme,
        "Where should the secret live?",
        &[selected.as_str(), mode.as_str()],
        help_text_inputs(theme),
    );

    f.render_widget(Block::default().borders(Borders::ALL).border_style(theme.border()), middle);
    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(w.form().lines(theme));
    f.render_widget(Paragraph::new(lines), middle.inner(&Margin { horizontal: 2, vertical: 1 }));
}
