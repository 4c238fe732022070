//! Path-draw visual — a serpentine line revealed by draw progress.
//!
//! The terminal stand-in for an SVG stroke animated with a dash offset: the
//! full route is laid out once per frame and the first `progress × length`
//! cells are drawn solid.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::theme::Theme;

/// One cell of the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathCell {
    x: u16,
    y: u16,
    glyph: char,
}

/// Route through `area`: across a row, down two, back across, and so on.
fn serpentine(area: Rect) -> Vec<PathCell> {
    let mut cells = Vec::new();
    if area.width < 2 || area.height == 0 {
        return cells;
    }
    let left = area.x;
    let right = area.x + area.width - 1;
    let mut rightward = true;
    let mut y = area.y;
    let bottom = area.y + area.height;

    while y < bottom {
        let xs: Vec<u16> = if rightward {
            (left..=right).collect()
        } else {
            (left..=right).rev().collect()
        };
        cells.extend(xs.into_iter().map(|x| PathCell { x, y, glyph: '━' }));

        // Drop down the edge to the next pass.
        let turn_x = if rightward { right } else { left };
        let next = y + 2;
        if next >= bottom {
            break;
        }
        cells.push(PathCell {
            x: turn_x,
            y: y + 1,
            glyph: '┃',
        });
        y = next;
        rightward = !rightward;
    }
    cells
}

/// Number of cells drawn solid for `progress` on a route of `len` cells.
fn drawn_len(progress: f64, len: usize) -> usize {
    let clamped = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    ((clamped * len as f64).round() as usize).min(len)
}

pub struct PathTrace {
    /// Draw progress in `[0, 1]`.
    pub progress: f64,
}

impl Widget for PathTrace {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let route = serpentine(area);
        let drawn = drawn_len(self.progress, route.len());
        for (i, cell) in route.iter().enumerate() {
            let (glyph, style) = if i < drawn {
                (cell.glyph, Theme::path_drawn_style())
            } else {
                ('·', Theme::path_pending_style())
            };
            buf[(cell.x, cell.y)].set_char(glyph).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serpentine_covers_alternate_rows() {
        let route = serpentine(Rect::new(0, 0, 4, 3));
        // Row 0 (4) + turn (1) + row 2 (4).
        assert_eq!(route.len(), 9);
        assert_eq!(route[3], PathCell { x: 3, y: 0, glyph: '━' });
        assert_eq!(route[4], PathCell { x: 3, y: 1, glyph: '┃' });
        assert_eq!(route[5].x, 3);
        assert_eq!(route[8], PathCell { x: 0, y: 2, glyph: '━' });
    }

    #[test]
    fn degenerate_area_has_no_route() {
        assert!(serpentine(Rect::new(0, 0, 1, 5)).is_empty());
        assert!(serpentine(Rect::new(0, 0, 10, 0)).is_empty());
    }

    #[test]
    fn drawn_length_tracks_progress() {
        assert_eq!(drawn_len(0.0, 40), 0);
        assert_eq!(drawn_len(0.5, 40), 20);
        assert_eq!(drawn_len(1.0, 40), 40);
        assert_eq!(drawn_len(1.4, 40), 40);
        assert_eq!(drawn_len(f64::NAN, 40), 0);
    }

    #[test]
    fn renders_solid_prefix() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        PathTrace { progress: 0.3 }.render(area, &mut buf);
        assert_eq!(buf[(2, 0)].symbol(), "━");
        assert_eq!(buf[(3, 0)].symbol(), "·");
    }
}
