pub mod cert_picker;
pub mod file_mode;
pub mod file_picker;
pub mod result;
pub mod text_inputs;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use textwrap::wrap;

use crate::ui::help::FOOTER_HEIGHT;
use crate::ui::layout::{three_box_layout, top_height_for, Margins};
use crate::ui::style::Theme;
use crate::wizard::{ViewState, WizardController};

/// Renders the active view.
pub fn draw(f: &mut Frame<'_>, w: &WizardController, theme: &Theme) {
    let size = f.size();
    match w.state() {
        ViewState::FilePicker => file_picker::draw(f, size, w, theme),
        ViewState::FileModeChoice => file_mode::draw(f, size, w, theme),
        ViewState::TextInputs => text_inputs::draw(f, size, w, theme),
        ViewState::CertPicker => cert_picker::draw(f, size, w, theme),
        ViewState::Result => result::draw(f, size, w, theme),
    }
}

/// Draws the header box and the footer legend; returns the middle area.
fn chrome(
    f: &mut Frame<'_>,
    size: Rect,
    theme: &Theme,
    header: &str,
    paragraphs: &[&str],
    help: Paragraph<'_>,
) -> Rect {
    let margins = Margins::default();
    let top_needed = top_height_for(size.width, &margins, header, paragraphs);
    let regions = three_box_layout(size, top_needed, FOOTER_HEIGHT, margins);

    // TOP
    f.render_widget(Block::default().borders(Borders::ALL).border_style(theme.border()), regions.top);
    let width = regions.top_inner.width.max(1) as usize;
    let header_lines = wrap(header, width).len().max(1) as u16;
    let top_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_lines), Constraint::Length(1), Constraint::Min(1)])
        .split(regions.top_inner);

    let header_para = Paragraph::new(header.to_string())
        .style(theme.label_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let mut expl: Vec<Line> = Vec::new();
    for (i, p) in paragraphs.iter().enumerate() {
        for seg in wrap(p, width) {
            expl.push(Line::from(seg.to_string()));
        }
        if i + 1 < paragraphs.len() {
            expl.push(Line::from(""));
        }
    }
    f.render_widget(header_para, top_chunks[0]);
    f.render_widget(Paragraph::new(expl), top_chunks[2]);

    // FOOTER
    f.render_widget(Block::default().borders(Borders::ALL).border_style(theme.border()), regions.bottom);
    f.render_widget(help, regions.bottom_inner);

    regions.middle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SecretBuildError;
    use crate::kube::{BuildRequest, SecretBuilder};
    use crate::wizard::WizardConfig;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;

    struct Unused;

    #[async_trait]
    impl SecretBuilder for Unused {
        async fn build(&self, _request: &BuildRequest) -> Result<Vec<u8>, SecretBuildError> {
            Ok(Vec::new())
        }
    }

    fn screen_text(w: &WizardController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let theme = Theme::default();
        terminal.draw(|f| w.draw(f, &theme)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    fn wizard(dir: &std::path::Path) -> WizardController {
        let config = WizardConfig {
            source_dir: dir.to_path_buf(),
            cert_dir: dir.to_path_buf(),
            output_path: dir.join("secret.yaml"),
        };
        WizardController::new(config, Box::new(Unused))
    }

    #[test]
    fn file_picker_shows_listing_and_hint() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("password.txt"), "pw").unwrap();
        let w = wizard(dir.path());

        let text = screen_text(&w);
        assert!(text.contains("Name"));
        assert!(text.contains("Date modified"));
        assert!(text.contains("password.txt"));
        assert!(text.contains(&format!("..{}", std::path::MAIN_SEPARATOR)));
        assert!(text.contains("ctrl+c to quit"));
    }

    #[tokio::test]
    async fn text_inputs_show_selection_and_button() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("password.txt"), "pw").unwrap();
        let mut w = wizard(dir.path());

        w.on_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)).await.unwrap();
        w.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).await.unwrap();
        assert_eq!(w.state(), ViewState::TextInputs);

        let text = screen_text(&w);
        assert!(text.contains("password.txt"));
        assert!(text.contains("Mode: file"));
        assert!(text.contains("Namespace:"));
        assert!(text.contains("Secret Key:"));
        assert!(text.contains("[ Continue ]"));
    }
}
