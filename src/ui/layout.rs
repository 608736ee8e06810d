use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use textwrap::wrap;

/// The three stacked boxes every wizard view is drawn into.
pub struct ThreeBox {
    pub top: Rect,
    pub middle: Rect,
    pub bottom: Rect,
    pub top_inner: Rect,
    pub bottom_inner: Rect,
}

pub struct Margins {
    pub page: u16,       // outer page margin
    pub inner_side: u16, // horizontal padding inside each box
}

impl Default for Margins {
    fn default() -> Self {
        Self { page: 1, inner_side: 2 }
    }
}

/// Rows the top box needs for a header plus wrapped explanation paragraphs.
pub fn top_height_for(width: u16, margins: &Margins, header: &str, paragraphs: &[&str]) -> u16 {
    let inner_width = width.saturating_sub(2 * margins.page + 2 + 2 * margins.inner_side).max(1) as usize;
    let header_lines = wrap(header, inner_width).len().max(1);
    let body_lines: usize = paragraphs.iter().map(|p| wrap(p, inner_width).len()).sum();
    let gaps = paragraphs.len().saturating_sub(1);
    // borders + vertical padding + header + spacer + body
    (2 + 2 + header_lines + 1 + body_lines + gaps) as u16
}

/// Top box sized to its content, footer fixed, middle takes the rest.
pub fn three_box_layout(size: Rect, top_needed: u16, footer_height: u16, margins: Margins) -> ThreeBox {
    let available = size.height.saturating_sub(2 * margins.page).saturating_sub(footer_height);
    let top_min = 5;
    let top_height = top_needed.min(available.saturating_sub(top_min)).max(top_min.min(available));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(margins.page)
        .constraints([
            Constraint::Length(top_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(size);

    let pad = Margin { horizontal: margins.inner_side, vertical: 1 };
    ThreeBox {
        top: chunks[0],
        middle: chunks[1],
        bottom: chunks[2],
        top_inner: chunks[0].inner(&pad),
        bottom_inner: chunks[2].inner(&Margin { horizontal: margins.inner_side, vertical: 1 }),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
