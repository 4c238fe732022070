//! Top navigation bar — full while the page opens, compact near the content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::Theme;

const LINKS: &[&str] = &["Story", "Pricing", "Questions", "Reviews"];

pub struct NavBar {
    pub compact: bool,
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Theme::nav_style(self.compact);
        let line = if self.compact {
            Line::from(Span::raw(" ◆ scroll stage "))
        } else {
            let mut spans = vec![Span::raw(" ◆ scroll stage   ")];
            spans.extend(LINKS.iter().map(|l| Span::raw(format!(" {l} "))));
            Line::from(spans)
        };
        Paragraph::new(line).style(style).render(area, buf);
    }
}
