//! Hero panel — the pinned narrative at the top of the page.
//!
//! Expanded, it fills the page with the active section, the path-draw visual,
//! the thumbnail strip and the scroll prompt.  Collapsed, it shrinks to a
//! one-line band that names the active section.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::app::page::SECTION_COPY;
use crate::core::band::Sections;
use crate::core::stage::DerivedState;

use super::path_trace::PathTrace;
use super::theme::Theme;

const THUMBNAIL: &str = "[▣]";

fn section_copy(index: usize) -> (&'static str, &'static str) {
    SECTION_COPY[index % SECTION_COPY.len()]
}

/// Marker for the active section, filling as progress crosses its band.
fn band_fill(progress: f64, (low, high): (f64, f64)) -> &'static str {
    const FILL: [&str; 4] = ["◔", "◑", "◕", "●"];
    let within = ((progress - low) / (high - low)).clamp(0.0, 1.0);
    FILL[((within * FILL.len() as f64) as usize).min(FILL.len() - 1)]
}

/// Full-height hero.
pub struct HeroPanel<'a> {
    pub derived: &'a DerivedState,
    pub sections: &'a Sections,
    pub thumbnails_per_side: usize,
    /// Reserved centre width for the thumbnail strip, in cells.
    pub center_cols: u16,
}

impl<'a> HeroPanel<'a> {
    fn markers(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = self
            .sections
            .iter()
            .map(|section| {
                let active = section.index == self.derived.section_index;
                let dot = if active {
                    band_fill(self.derived.progress, section.band)
                } else {
                    "○"
                };
                Span::styled(
                    format!(" {dot} {}", section_copy(section.index).0),
                    Theme::section_marker_style(active),
                )
            })
            .collect();
        Line::from(spans)
    }

    fn thumbnail_strip(&self) -> Line<'static> {
        let side = THUMBNAIL.repeat(self.thumbnails_per_side);
        let title = format!("{:^width$}", "scroll stage", width = usize::from(self.center_cols));
        Line::from(vec![
            Span::styled(side.clone(), Theme::thumbnail_style()),
            Span::styled(title, Theme::section_title_style()),
            Span::styled(side, Theme::thumbnail_style()),
        ])
        .centered()
    }
}

impl<'a> Widget for HeroPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // section markers
                Constraint::Length(1), // thumbnails + title
                Constraint::Length(2), // section copy
                Constraint::Min(0),    // path
                Constraint::Length(1), // prompt
            ])
            .split(inner);

        Paragraph::new(self.markers()).render(rows[0], buf);
        Paragraph::new(self.thumbnail_strip()).render(rows[1], buf);

        let (title, body) = section_copy(self.derived.section_index);
        Paragraph::new(vec![
            Line::styled(title, Theme::section_title_style()).centered(),
            Line::styled(body, Theme::section_body_style()).centered(),
        ])
        .render(rows[2], buf);

        let path_area = rows[3].inner(ratatui::layout::Margin::new(2, 1));
        PathTrace {
            progress: self.derived.path_progress,
        }
        .render(path_area, buf);

        if !self.derived.scroll_prompt_hidden {
            Paragraph::new(Line::styled("↓ scroll to begin", Theme::prompt_style()).centered())
                .render(rows[4], buf);
        }
    }
}

/// Collapsed hero band.
pub struct CollapsedHero<'a> {
    pub derived: &'a DerivedState,
}

impl<'a> Widget for CollapsedHero<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, _) = section_copy(self.derived.section_index);
        let line = Line::from(vec![
            Span::styled(
                format!(" {} · {title} ", self.derived.section_index + 1),
                Theme::section_title_style(),
            ),
            Span::styled(
                format!(" path {:>3.0}% ", self.derived.path_progress * 100.0),
                Theme::path_drawn_style(),
            ),
        ]);
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border_style()),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn prompt_shows_until_hidden() {
        let area = Rect::new(0, 0, 60, 14);
        let mut derived = DerivedState::default();

        let mut buf = Buffer::empty(area);
        HeroPanel {
            derived: &derived,
            sections: &Sections::default(),
            thumbnails_per_side: 1,
            center_cols: 20,
        }
        .render(area, &mut buf);
        assert!(row_text(&buf, 12).contains("scroll to begin"));

        derived.scroll_prompt_hidden = true;
        let mut buf = Buffer::empty(area);
        HeroPanel {
            derived: &derived,
            sections: &Sections::default(),
            thumbnails_per_side: 1,
            center_cols: 20,
        }
        .render(area, &mut buf);
        assert!(!row_text(&buf, 12).contains("scroll to begin"));
    }

    #[test]
    fn thumbnail_count_matches_capacity() {
        let area = Rect::new(0, 0, 80, 10);
        let derived = DerivedState::default();
        let mut buf = Buffer::empty(area);
        HeroPanel {
            derived: &derived,
            sections: &Sections::default(),
            thumbnails_per_side: 2,
            center_cols: 20,
        }
        .render(area, &mut buf);
        assert_eq!(row_text(&buf, 2).matches('▣').count(), 4);
    }

    #[test]
    fn active_marker_fills_across_band() {
        assert_eq!(band_fill(0.0, (0.0, 0.25)), "◔");
        assert_eq!(band_fill(0.07, (0.0, 0.25)), "◑");
        assert_eq!(band_fill(0.13, (0.0, 0.25)), "◕");
        assert_eq!(band_fill(0.24, (0.0, 0.25)), "●");
        assert_eq!(band_fill(1.0, (0.75, 1.0)), "●");
    }

    #[test]
    fn collapsed_band_names_active_section() {
        let area = Rect::new(0, 0, 40, 3);
        let derived = DerivedState {
            section_index: 2,
            path_progress: 1.0,
            hero_collapsed: true,
            ..DerivedState::default()
        };
        let mut buf = Buffer::empty(area);
        CollapsedHero { derived: &derived }.render(area, &mut buf);
        let text = row_text(&buf, 1);
        assert!(text.contains("3 · Ship"));
        assert!(text.contains("100%"));
    }
}
