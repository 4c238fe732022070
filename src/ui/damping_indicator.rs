//! Soft-stop badge drawn over the page's top border while the governor is
//! replacing wheel input.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::theme::Theme;

const PULSE: &[&str] = &["◐", "◓", "◑", "◒"];
const BAR_CELLS: usize = 6;

pub struct DampingIndicator {
    /// Fraction of the damping window still to run; `None` when idle.
    pub remaining: Option<f64>,
    pub tick: u64,
}

/// `cells` wide bar, full at 1.0 and empty at 0.0.
fn countdown_bar(remaining: f64, cells: usize) -> String {
    let filled = ((remaining.clamp(0.0, 1.0) * cells as f64).ceil() as usize).min(cells);
    format!("{}{}", "▮".repeat(filled), "▯".repeat(cells - filled))
}

impl Widget for DampingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(remaining) = self.remaining else {
            return;
        };
        let pulse = PULSE[(self.tick as usize) % PULSE.len()];
        let line = Line::from(vec![
            Span::styled(format!(" {pulse} easing "), Theme::damping_style()),
            Span::styled(countdown_bar(remaining, BAR_CELLS), Theme::path_drawn_style()),
            Span::raw(" "),
        ]);

        let width = line.width() as u16;
        if area.height == 0 || area.width < width + 2 {
            return;
        }
        // Top-right, clear of the corner glyph.
        let x = area.x + area.width - width - 1;
        buf.set_line(x, area.y, &line, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn bar_shrinks_with_window() {
        assert_eq!(countdown_bar(1.0, 6), "▮▮▮▮▮▮");
        assert_eq!(countdown_bar(0.5, 6), "▮▮▮▯▯▯");
        assert_eq!(countdown_bar(0.01, 6), "▮▯▯▯▯▯");
        assert_eq!(countdown_bar(0.0, 6), "▯▯▯▯▯▯");
    }

    #[test]
    fn hidden_when_idle() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        DampingIndicator {
            remaining: None,
            tick: 0,
        }
        .render(area, &mut buf);
        assert_eq!(top_row(&buf).trim(), "");
    }

    #[test]
    fn sits_top_right_while_damping() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        DampingIndicator {
            remaining: Some(1.0),
            tick: 1,
        }
        .render(area, &mut buf);
        let row = top_row(&buf);
        assert!(row.contains("◓ easing ▮▮▮▮▮▮"));
        assert_eq!(buf[(39, 0)].symbol(), " ");
    }
}
