use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::style::Theme;

/// Single-line editable text with a byte-offset cursor kept on char boundaries.
#[derive(Clone, Debug, Default)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
    pub limit: Option<usize>,
}

impl TextField {
    #[cfg(test)]
    pub fn with(text: &str) -> Self {
        Self { text: text.into(), cursor: text.len(), limit: None }
    }
    pub fn with_limit(mut self, limit: usize) -> Self { self.limit = Some(limit); self }

    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    pub fn insert_char(&mut self, c: char) {
        if let Some(limit) = self.limit {
            if self.text.chars().count() >= limit { return; }
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }
    pub fn delete(&mut self) { if self.cursor < self.text.len() { self.text.remove(self.cursor); } }
    pub fn move_left(&mut self) { if let Some(prev) = self.prev_boundary() { self.cursor = prev; } }
    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() { self.cursor += c.len_utf8(); }
    }
    pub fn home(&mut self) { self.cursor = 0; }
    pub fn end(&mut self) { self.cursor = self.text.len(); }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

// Bash-style block cursor that covers the char (no shifting)
pub fn field_line_text<'a>(label: &str, placeholder: &str, field: &TextField, focused: bool, theme: &Theme) -> Line<'a> {
    let prefix = if focused { "> " } else { "  " };
    let label_span = Span::styled(format!("{prefix}{label}: "), if focused {
        theme.focused_style()
    } else {
        theme.label_style()
    });

    let text = field.text.as_str();
    if !focused {
        if text.is_empty() {
            return Line::from(vec![label_span, Span::styled(placeholder.to_string(), Style::default().fg(theme.blurred))]);
        }
        return Line::from(vec![label_span, Span::raw(text.to_string())]);
    }

    let cur = field.cursor.min(text.len());
    let (left, rest) = text.split_at(cur);
    let block = |s: &str| {
        Span::styled(
            s.to_string(),
            Style::default().fg(Color::Black).bg(theme.focused).add_modifier(Modifier::BOLD),
        )
    };

    if let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        Line::from(vec![
            label_span,
            Span::styled(left.to_string(), theme.focused_style()),
            block(&ch.to_string()),
            Span::styled(after.to_string(), theme.focused_style()),
        ])
    } else {
        Line::from(vec![label_span, Span::styled(left.to_string(), theme.focused_style()), block(" ")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_char_boundaries() {
        let mut f = TextField::with("größe");
        f.backspace();
        assert_eq!(f.text, "größ");
        f.move_left();
        f.backspace();
        assert_eq!(f.text, "grß");
        f.home();
        f.move_right();
        f.delete();
        assert_eq!(f.text, "gß");
        f.end();
        f.insert_char('é');
        assert_eq!(f.text, "gßé");
        assert_eq!(f.cursor, f.text.len());
    }

    #[test]
    fn limit_caps_input() {
        let mut f = TextField::default().with_limit(3);
        for c in "abcdef".chars() {
            f.insert_char(c);
        }
        assert_eq!(f.text, "abc");
    }

    #[test]
    fn blurred_empty_field_shows_placeholder() {
        let theme = Theme::default();
        let f = TextField::default();
        let line = field_line_text("Namespace", "my-namespace", &f, false, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "  Namespace: my-namespace");
    }

    #[test]
    fn focused_field_renders_block_cursor() {
        let theme = Theme::default();
        let f = TextField::with("ns");
        let line = field_line_text("Namespace", "", &f, true, &theme);
        let last = line.spans.last().unwrap();
        assert_eq!(last.content, " ");
        assert_eq!(last.style.bg, Some(theme.focused));
    }
}
