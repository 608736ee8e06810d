use ratatui::{
    layout::{Margin, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::chrome;
use crate::secrets::FileMode;
use crate::ui::help::help_file_mode;
use crate::ui::style::Theme;
use crate::wizard::WizardController;

pub fn draw(f: &mut Frame<'_>, size: Rect, w: &WizardController, theme: &Theme) {
    let selected = w
        .selected_file()
        .map(|p| format!("Selected file: {}", p.display()))
        .unwrap_or_default();
    let middle = chrome(
        f,
        size,
        theme,
        "Which file mode should be used for this secret?",
        &[
            selected.as_str(),
            "file: the whole file is stored under one key. yaml: every top-level key of the file becomes a secret key.",
        ],
        help_file_mode(theme),
    );

    f.render_widget(Block::default().borders(Borders::ALL).border_style(theme.border()), middle);
    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, mode) in FileMode::ALL.iter().enumerate() {
        lines.push(theme.radio_line(mode.label(), i == w.mode_cursor()));
    }
    f.render_widget(Paragraph::new(lines), middle.inner(&Margin { horizontal: 2, vertical: 1 }));
}
