//! Directory browser used by both file pickers.

pub mod lister;

use std::path::{Component, Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::defaults::Defaults;
use crate::error::FilesystemError;
use crate::ui::style::Theme;

pub use lister::{list_dir, DirectoryEntry};

/// What pressing Enter on the current row did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Moved into a directory (or its parent).
    Navigated,
    /// A regular file was picked.
    Chosen(PathBuf),
    /// The directory could not be listed; the old listing is still shown.
    Failed,
}

pub struct FileBrowser {
    current_path: PathBuf,
    rows: Vec<DirectoryEntry>,
    selected: usize,
    focused: bool,
    error: Option<String>,
}

impl FileBrowser {
    /// Opens a browser on `path`. A failed first listing still yields a usable
    /// browser holding only the parent entry, with the error shown inline.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let current_path = path.into();
        let (rows, error) = match list_dir(&current_path) {
            Ok(rows) => (rows, None),
            Err(e) => {
                tracing::warn!(error = %e, "initial listing failed");
                (vec![DirectoryEntry::parent()], Some(e.to_string()))
            }
        };
        Self { current_path, rows, selected: 0, focused: true, error }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn rows(&self) -> &[DirectoryEntry] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current_selection(&self) -> Option<&DirectoryEntry> {
        self.rows.get(self.selected)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Moves the selection by `delta`, clamped to the list. Returns true if it moved.
    pub fn select(&mut self, delta: isize) -> bool {
        let last = self.rows.len().saturating_sub(1) as isize;
        let next = (self.selected as isize + delta).clamp(0, last) as usize;
        let moved = next != self.selected;
        self.selected = next;
        moved
    }

    /// Re-lists the browser at `row`, which must be a directory row.
    /// On failure the previous listing stays and the error is kept for display.
    pub fn navigate_into(&mut self, row: &DirectoryEntry) -> Result<(), FilesystemError> {
        debug_assert!(row.is_dir, "navigate_into called on a file row");
        let target = join_entry(&self.current_path, &row.name);
        match list_dir(&target) {
            Ok(rows) => {
                tracing::debug!(path = %target.display(), entries = rows.len() - 1, "navigated");
                self.current_path = target;
                self.rows = rows;
                self.selected = 0;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "navigation failed");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Enter on the selected row: descend, ascend or pick a file.
    pub fn activate(&mut self) -> Activation {
        let Some(row) = self.current_selection().cloned() else {
            return Activation::Failed;
        };
        if row.is_dir {
            match self.navigate_into(&row) {
                Ok(()) => Activation::Navigated,
                Err(_) => Activation::Failed,
            }
        } else {
            Activation::Chosen(self.current_path.join(&row.name))
        }
    }

    /// List navigation keys. Returns true when a redraw is needed.
    pub fn on_key(&mut self, k: KeyEvent) -> bool {
        if k.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        let page = Defaults::BROWSER_PAGE as isize;
        match k.code {
            KeyCode::Up | KeyCode::Char('k') => self.select(-1),
            KeyCode::Down | KeyCode::Char('j') => self.select(1),
            KeyCode::PageUp => self.select(-page),
            KeyCode::PageDown => self.select(page),
            KeyCode::Home | KeyCode::Char('g') => self.select(-(self.selected as isize)),
            KeyCode::End | KeyCode::Char('G') => self.select(self.rows.len() as isize),
            _ => false,
        }
    }

    pub fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(if self.error().is_some() { 1 } else { 0 })])
            .split(area);

        let header = Row::new(vec!["Name", "Size (B)", "Date modified"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = self.rows().iter().map(|r| {
            Row::new(vec![r.display_name(), r.display_size(), r.display_modified()])
        });
        let widths = [Constraint::Min(20), Constraint::Length(10), Constraint::Length(20)];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(self.current_path.display().to_string()),
            )
            .highlight_style(if self.focused { theme.selected_row() } else { Style::default() });

        let mut state = TableState::default().with_selected(Some(self.selected_index()));
        f.render_stateful_widget(table, chunks[0], &mut state);

        if let Some(err) = self.error() {
            let line = Line::from(Span::styled(format!("! {err}"), theme.error_style()));
            f.render_widget(Paragraph::new(line), chunks[1]);
        }
    }
}

/// Joins a row name onto `base`; `..` pops a trailing normal component.
fn join_entry(base: &Path, name: &str) -> PathBuf {
    if name == Defaults::PARENT_ENTRY {
        match base.components().next_back() {
            Some(Component::Normal(_)) => {
                if let Some(parent) = base.parent() {
                    if !parent.as_os_str().is_empty() {
                        return parent.to_path_buf();
                    }
                }
            }
            Some(Component::RootDir) | Some(Component::Prefix(_)) => return base.to_path_buf(),
            _ => {}
        }
    }
    base.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn select_named(b: &mut FileBrowser, name: &str) {
        let idx = b.rows().iter().position(|r| r.name == name).unwrap();
        b.select(idx as isize - b.selected_index() as isize);
    }

    #[test]
    fn select_clamps_at_both_ends() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one"), "1").unwrap();
        fs::write(dir.path().join("two"), "2").unwrap();
        let mut b = FileBrowser::new(dir.path());

        assert!(!b.select(-1));
        assert_eq!(b.selected_index(), 0);
        b.select(100);
        assert_eq!(b.selected_index(), 2);
        assert!(!b.on_key(key(KeyCode::Down)));
        assert!(b.on_key(key(KeyCode::Home)));
        assert_eq!(b.selected_index(), 0);
        assert!(b.on_key(key(KeyCode::End)));
        assert_eq!(b.selected_index(), 2);
    }

    #[test]
    fn navigate_into_resets_selection_and_relists() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("certs")).unwrap();
        fs::write(dir.path().join("certs").join("ca.pem"), "pem").unwrap();
        fs::write(dir.path().join("zz.txt"), "z").unwrap();
        let mut b = FileBrowser::new(dir.path());

        select_named(&mut b, "certs");
        assert_eq!(b.activate(), Activation::Navigated);
        assert_eq!(b.current_path(), dir.path().join("certs"));
        assert_eq!(b.selected_index(), 0);
        assert_eq!(b.rows().len(), 2);

        // Row 0 is the parent entry, which brings us back up.
        assert_eq!(b.activate(), Activation::Navigated);
        assert_eq!(b.current_path(), dir.path());
        assert_eq!(b.selected_index(), 0);
        assert_eq!(b.rows().len(), 3);
    }

    #[test]
    fn activating_a_file_chooses_it() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("password.txt"), "pw").unwrap();
        let mut b = FileBrowser::new(dir.path());

        select_named(&mut b, "password.txt");
        assert_eq!(b.activate(), Activation::Chosen(dir.path().join("password.txt")));
    }

    #[test]
    fn failed_navigation_keeps_last_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("vanishing")).unwrap();
        fs::write(dir.path().join("keep.txt"), "k").unwrap();
        let mut b = FileBrowser::new(dir.path());
        let before = b.rows().to_vec();

        select_named(&mut b, "vanishing");
        let selected = b.selected_index();
        fs::remove_dir(dir.path().join("vanishing")).unwrap();

        assert_eq!(b.activate(), Activation::Failed);
        assert_eq!(b.current_path(), dir.path());
        assert_eq!(b.rows(), &before[..]);
        assert_eq!(b.selected_index(), selected);
        assert!(b.error().is_some());

        // A successful navigation clears the inline error.
        b.select(-(selected as isize));
        select_named(&mut b, "..");
        assert_eq!(b.activate(), Activation::Navigated);
        assert!(b.error().is_none());
    }

    #[test]
    fn unreadable_start_directory_still_has_parent_row() {
        let dir = tempfile::tempdir().unwrap();
        let b = FileBrowser::new(dir.path().join("missing"));
        assert_eq!(b.rows(), &[DirectoryEntry::parent()][..]);
        assert!(b.error().is_some());
    }

    #[test]
    fn parent_join_is_lexical() {
        assert_eq!(join_entry(Path::new("/a/b"), ".."), PathBuf::from("/a"));
        assert_eq!(join_entry(Path::new("/"), ".."), PathBuf::from("/"));
        assert_eq!(join_entry(Path::new("/a"), "b"), PathBuf::from("/a/b"));
        assert_eq!(join_entry(Path::new("a/.."), ".."), PathBuf::from("a/../.."));
    }
}
