//! Ordered text fields with cyclic focus and a trailing submit slot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::Line;

use super::components::{field_line_text, TextField};
use super::style::Theme;
use crate::defaults::Defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Forward,
    Backward,
}

/// Result of pressing Enter in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Every field is filled and the submit slot is focused; values in declared order.
    Ready(Vec<String>),
    /// The field at this index was empty and now has focus.
    ValidationFailed(usize),
    /// Every field is filled but a field, not the submit slot, is focused.
    Pending,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: TextField,
}

impl FormField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            input: TextField::default().with_limit(Defaults::INPUT_CHAR_LIMIT),
        }
    }

    pub fn value(&self) -> &str {
        &self.input.text
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormInputGroup {
    fields: Vec<FormField>,
    // fields.len() means the submit slot
    focus: usize,
}

impl FormInputGroup {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Index of the focused field, `None` when the submit slot has focus.
    pub fn focused_field(&self) -> Option<usize> {
        (self.focus < self.fields.len()).then_some(self.focus)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    pub fn value(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(FormField::value)
    }

    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value().to_string()).collect()
    }

    #[cfg(test)]
    pub fn set_value(&mut self, idx: usize, value: &str) {
        if let Some(f) = self.fields.get_mut(idx) {
            f.input.text = value.to_string();
            f.input.end();
        }
    }

    pub fn push_field(&mut self, field: FormField) {
        self.fields.push(field);
        self.focus = self.focus.min(self.fields.len());
    }

    pub fn pop_field(&mut self) -> Option<FormField> {
        let f = self.fields.pop();
        self.focus = self.focus.min(self.fields.len());
        f
    }

    pub fn focus_at(&mut self, idx: usize) {
        self.focus = idx.min(self.fields.len());
    }

    pub fn move_focus(&mut self, dir: FocusDirection) {
        let slots = self.fields.len() + 1;
        self.focus = match dir {
            FocusDirection::Forward => (self.focus + 1) % slots,
            FocusDirection::Backward => (self.focus + slots - 1) % slots,
        };
    }

    /// Routes an editing key to the focused field. Returns true if it was consumed.
    pub fn edit_focused(&mut self, k: KeyEvent) -> bool {
        let Some(idx) = self.focused_field() else { return false; };
        let tf = &mut self.fields[idx].input;
        match k.code {
            KeyCode::Left => tf.move_left(),
            KeyCode::Right => tf.move_right(),
            KeyCode::Home => tf.home(),
            KeyCode::End => tf.end(),
            KeyCode::Backspace => tf.backspace(),
            KeyCode::Delete => tf.delete(),
            KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => tf.insert_char(c),
            _ => return false,
        }
        true
    }

    /// Enter on any slot: jump to the first empty field, or hand out the values
    /// once every field is filled and the submit slot is focused.
    pub fn try_submit(&mut self) -> Submit {
        if let Some(idx) = self.fields.iter().position(|f| f.input.is_empty()) {
            self.focus = idx;
            return Submit::ValidationFailed(idx);
        }
        if self.is_submit_focused() {
            Submit::Ready(self.values())
        } else {
            Submit::Pending
        }
    }

    /// One line per field, a spacer, then the submit button.
    pub fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| field_line_text(f.label, f.placeholder, &f.input, i == self.focus, theme))
            .collect();
        lines.push(Line::from(""));
        lines.push(theme.button_line(Defaults::SUBMIT_LABEL, self.is_submit_focused()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(n: usize) -> FormInputGroup {
        let labels = ["a", "b", "c", "d"];
        FormInputGroup::new(labels[..n].iter().copied().map(|l| FormField::new(l, "")).collect())
    }

    fn type_into(g: &mut FormInputGroup, text: &str) {
        for c in text.chars() {
            g.edit_focused(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn forward_cycle_returns_to_start() {
        for n in 0..4 {
            let mut g = group(n);
            for start in 0..=n {
                g.focus_at(start);
                let mut seen = vec![g.focus_index()];
                for _ in 0..n {
                    g.move_focus(FocusDirection::Forward);
                    seen.push(g.focus_index());
                }
                g.move_focus(FocusDirection::Forward);
                assert_eq!(g.focus_index(), start);
                seen.sort();
                assert_eq!(seen, (0..=n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn backward_wraps_to_submit() {
        let mut g = group(3);
        g.move_focus(FocusDirection::Backward);
        assert!(g.is_submit_focused());
        assert_eq!(g.focused_field(), None);
        g.move_focus(FocusDirection::Forward);
        assert_eq!(g.focused_field(), Some(0));
    }

    #[test]
    fn exactly_one_slot_has_focus() {
        let mut g = group(3);
        for _ in 0..8 {
            let field_focused = g.focused_field().is_some();
            assert_ne!(field_focused, g.is_submit_focused());
            g.move_focus(FocusDirection::Forward);
        }
    }

    #[test]
    fn edits_go_to_focused_field_only() {
        let mut g = group(2);
        type_into(&mut g, "default");
        g.move_focus(FocusDirection::Forward);
        type_into(&mut g, "db");
        g.edit_focused(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(g.values(), vec!["default", "d"]);

        g.move_focus(FocusDirection::Forward);
        assert!(!g.edit_focused(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(g.values(), vec!["default", "d"]);
    }

    #[test]
    fn submit_focuses_lowest_empty_field() {
        let mut g = group(3);
        g.set_value(0, "default");
        g.focus_at(3);
        assert_eq!(g.try_submit(), Submit::ValidationFailed(1));
        assert_eq!(g.focused_field(), Some(1));

        g.set_value(1, "db-creds");
        g.set_value(2, "password");
        g.set_value(0, "");
        assert_eq!(g.try_submit(), Submit::ValidationFailed(0));
        assert_eq!(g.focused_field(), Some(0));
    }

    #[test]
    fn submit_ready_only_from_submit_slot() {
        let mut g = group(3);
        g.set_value(0, "default");
        g.set_value(1, "db-creds");
        g.set_value(2, "password");
        g.focus_at(1);
        assert_eq!(g.try_submit(), Submit::Pending);
        assert_eq!(g.focused_field(), Some(1));

        g.focus_at(3);
        assert_eq!(
            g.try_submit(),
            Submit::Ready(vec!["default".into(), "db-creds".into(), "password".into()])
        );
    }

    #[test]
    fn removing_the_focused_last_field_moves_focus_to_submit() {
        let mut g = group(3);
        g.focus_at(2);
        g.pop_field();
        assert!(g.is_submit_focused());
        assert_eq!(g.len(), 2);
    }
}
