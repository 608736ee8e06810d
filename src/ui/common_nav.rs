use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::wizard::Transition;

/// Return `Transition::Back` on Esc so every view gets "Back" for free.
pub fn esc_to_back(k: KeyEvent) -> Option<Transition> {
    if matches!(k.code, KeyCode::Esc) {
        Some(Transition::Back)
    } else {
        None
    }
}

/// Ctrl+C or Ctrl+Q: leave immediately from any view.
pub fn is_quit_combo(k: KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL) && matches!(k.code, KeyCode::Char('c' | 'C' | 'q' | 'Q'))
}
