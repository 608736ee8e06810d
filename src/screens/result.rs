use ratatui::{
    layout::{Alignment, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::help::help_result;
use crate::ui::layout::centered_rect;
use crate::ui::style::Theme;
use crate::wizard::WizardController;

pub fn draw(f: &mut Frame<'_>, size: Rect, w: &WizardController, theme: &Theme) {
    let area = centered_rect(80, 50, size);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title("Result");

    let (verb, path) = match w.outcome() {
        Some(o) if o.sealed() => ("sealed", o.output_path.display().to_string()),
        Some(o) => ("created", o.output_path.display().to_string()),
        None => ("created", w.output_path().display().to_string()),
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(format!("Secret successfully {verb}."), theme.focused_style()),
        Line::from(format!("Filepath: {path}")),
        Line::from(""),
    ];
    if let Some(o) = w.outcome() {
        lines.push(Line::from(format!("Namespace: {}  Name: {}", o.spec.namespace, o.spec.secret_name)));
        lines.push(Line::from(""));
    }

    f.render_widget(Clear, area);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        inner,
    );

    let hint_area = Rect { y: inner.y + inner.height.saturating_sub(2), height: 2.min(inner.height), ..inner };
    f.render_widget(help_result(theme).alignment(Alignment::Center), hint_area);
}
