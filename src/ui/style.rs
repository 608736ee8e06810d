// style.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::borrow::Cow;

/// Colors for every view. Passed down into the draw functions.
#[derive(Debug, Clone)]
pub struct Theme {
    pub focused: Color,
    pub blurred: Color,
    pub label: Color,
    pub key: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focused: Color::Indexed(205),
            blurred: Color::Indexed(240),
            label: Color::Yellow,
            key: Color::Cyan,
            selected_fg: Color::Indexed(229),
            selected_bg: Color::Indexed(57),
            error: Color::Red,
        }
    }
}

impl Theme {
    pub fn span_key(&self, s: &'static str) -> Span<'static> {
        Span::styled(s, Style::default().fg(self.key).add_modifier(Modifier::BOLD))
    }

    pub fn span_sep(&self) -> Span<'static> {
        Span::styled("  |  ", Style::default().fg(self.blurred))
    }

    pub fn span_text(&self, s: &'static str) -> Span<'static> {
        Span::raw(s)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.blurred)
    }

    pub fn focused_style(&self) -> Style {
        Style::default().fg(self.focused)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label)
    }

    pub fn selected_row(&self) -> Style {
        Style::default().fg(self.selected_fg).bg(self.selected_bg)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// "[ " + LABEL + " ]", pink when focused and grey otherwise.
    pub fn button_spans<S: Into<Cow<'static, str>>>(&self, label: S, focused: bool) -> Vec<Span<'static>> {
        let label = label.into();
        if focused {
            vec![
                Span::styled("[ ", self.focused_style()),
                Span::styled(label, self.focused_style().add_modifier(Modifier::BOLD)),
                Span::styled(" ]", self.focused_style()),
            ]
        } else {
            vec![
                Span::raw("[ "),
                Span::styled(label, Style::default().fg(self.blurred)),
                Span::raw(" ]"),
            ]
        }
    }

    pub fn button_line<S: Into<Cow<'static, str>>>(&self, label: S, focused: bool) -> Line<'static> {
        Line::from(self.button_spans(label, focused))
    }

    /// "(•) label" radio row for single-choice lists.
    pub fn radio_line(&self, label: &str, selected: bool) -> Line<'static> {
        if selected {
            Line::from(vec![
                Span::styled("(•) ", self.focused_style()),
                Span::styled(label.to_string(), self.focused_style()),
            ])
        } else {
            Line::from(vec![Span::raw("( ) "), Span::raw(label.to_string())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn button_text_is_same_regardless_of_focus() {
        let theme = Theme::default();
        assert_eq!(text(&theme.button_line("Continue", true)), "[ Continue ]");
        assert_eq!(text(&theme.button_line("Continue", false)), "[ Continue ]");
    }

    #[test]
    fn focused_button_uses_focus_color() {
        let theme = Theme::default();
        let spans = theme.button_spans("Continue", true);
        assert_eq!(spans[1].style.fg, Some(theme.focused));
        let spans = theme.button_spans("Continue", false);
        assert_eq!(spans[1].style.fg, Some(theme.blurred));
    }

    #[test]
    fn radio_marks_selection() {
        let theme = Theme::default();
        assert_eq!(text(&theme.radio_line("yaml", true)), "(•) yaml");
        assert_eq!(text(&theme.radio_line("file", false)), "( ) file");
    }
}
