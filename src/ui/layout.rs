//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: nav bar, the page itself, and a bottom status bar.
pub struct ScreenLayout {
    pub nav_area: Rect,
    pub page_area: Rect,
    pub status_area: Rect,
}

impl ScreenLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // nav bar
                Constraint::Min(1),    // page (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            nav_area: chunks[0],
            page_area: chunks[1],
            status_area: chunks[2],
        }
    }
}

/// Rows the collapsed hero keeps at the top of the page.
pub const COLLAPSED_HERO_ROWS: u16 = 3;

/// Split the page into the collapsed hero band and the scrolling content below.
pub fn split_collapsed(page: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(COLLAPSED_HERO_ROWS), Constraint::Min(0)])
        .split(page);
    (chunks[0], chunks[1])
}
