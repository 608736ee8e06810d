use ratatui::{
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::style::Theme;
use crate::defaults::Defaults;

/// Footer box rows: two borders, the key legend and the navigation hint.
pub const FOOTER_HEIGHT: u16 = 4;

fn legend<'a>(theme: &Theme, keys: &[(&'static str, &'static str)]) -> Paragraph<'a> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, (key, what)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(theme.span_sep());
        }
        spans.push(theme.span_key(*key));
        spans.push(theme.span_text(*what));
    }
    let hint = Line::from(Span::styled(Defaults::NAVIGATION_HINT, theme.border()));
    Paragraph::new(vec![Line::from(spans), hint]).wrap(Wrap { trim: true })
}

pub fn help_file_picker<'a>(theme: &Theme) -> Paragraph<'a> {
    legend(theme, &[
        ("↑/↓", " Move"),
        ("Enter", " Open / Select"),
        ("Esc", " Quit"),
        ("Ctrl+C", " Quit"),
    ])
}

pub fn help_file_mode<'a>(theme: &Theme) -> Paragraph<'a> {
    legend(theme, &[
        ("↑/↓/Tab", " Choose"),
        ("Enter", " Confirm"),
        ("Esc", " Back"),
        ("Ctrl+C", " Quit"),
    ])
}

pub fn help_text_inputs<'a>(theme: &Theme) -> Paragraph<'a> {
    legend(theme, &[
        ("↑/↓/Tab", " Move"),
        ("Enter", " Continue (on [Continue])"),
        ("←/→/Home/End", " Cursor"),
        ("Esc", " Back"),
        ("Ctrl+C", " Quit"),
    ])
}

pub fn help_cert_picker<'a>(theme: &Theme) -> Paragraph<'a> {
    legend(theme, &[
        ("↑/↓", " Move"),
        ("Enter", " Open / Seal with cert"),
        ("s", " Skip sealing"),
        ("Esc", " Back"),
        ("Ctrl+C", " Quit"),
    ])
}

pub fn help_result<'a>(theme: &Theme) -> Paragraph<'a> {
    legend(theme, &[("Any key", " Quit")])
}
