//! Scrolling content below the collapsed hero.
//!
//! Rows are mapped back to document pixels, so each block appears exactly
//! where the page model placed it.  The headline either scrolls with the
//! document or, once the label is static, pins to the top row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::app::page::{PageGeometry, CONTENT_BLOCKS, CONTENT_VIEWPORTS};

use super::theme::Theme;

const HEADLINE: &str = "Pick the plan that fits the story";

pub struct ContentView<'a> {
    pub page: &'a PageGeometry,
    pub offset_px: f64,
    pub row_px: f64,
    pub label_static: bool,
}

impl<'a> ContentView<'a> {
    /// Document y of the top of content block `i`.
    fn block_top_px(&self, i: usize) -> f64 {
        let spacing =
            self.page.viewport_height_px * CONTENT_VIEWPORTS / CONTENT_BLOCKS.len() as f64;
        self.page.content_top_px() + spacing * i as f64
    }

    /// Row within `area` for document y, if visible.
    fn row_for(&self, doc_y: f64, area: Rect, first_row: u16) -> Option<u16> {
        let rel = ((doc_y - self.offset_px) / self.row_px).floor();
        if rel < f64::from(first_row) || rel >= f64::from(area.height) {
            return None;
        }
        Some(area.y + rel as u16)
    }

    fn put(&self, line: Line<'_>, y: u16, area: Rect, buf: &mut Buffer) {
        Paragraph::new(line).render(Rect::new(area.x, y, area.width, 1), buf);
    }
}

impl<'a> Widget for ContentView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // A pinned headline owns the first row; everything else flows below it.
        let first_row = u16::from(self.label_static);
        if self.label_static {
            self.put(
                Line::styled(HEADLINE, Theme::headline_style(true)).centered(),
                area.y,
                area,
                buf,
            );
        } else if let Some(headline) = self.page.layout.headline {
            if let Some(y) = self.row_for(headline.top_px, area, first_row) {
                self.put(
                    Line::styled(HEADLINE, Theme::headline_style(false)).centered(),
                    y,
                    area,
                    buf,
                );
            }
        }

        for (i, (title, lines)) in CONTENT_BLOCKS.iter().enumerate() {
            let top = self.block_top_px(i);
            if let Some(y) = self.row_for(top, area, first_row) {
                self.put(Line::styled(*title, Theme::block_title_style()), y, area, buf);
            }
            for (j, text) in lines.iter().enumerate() {
                let doc_y = top + self.row_px * (j + 2) as f64;
                if let Some(y) = self.row_for(doc_y, area, first_row) {
                    self.put(Line::raw(format!("  {text}")), y, area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stage::StageConfig;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn page() -> PageGeometry {
        PageGeometry::measure(&StageConfig::default(), 50, 20.0)
    }

    #[test]
    fn pinned_headline_takes_top_row() {
        let page = page();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        ContentView {
            page: &page,
            offset_px: 4200.0,
            row_px: 20.0,
            label_static: true,
        }
        .render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("Pick the plan"));
    }

    #[test]
    fn first_block_sits_at_content_top() {
        let page = page();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        // Content starts at 5000px; at offset 4900 that's row 5.
        ContentView {
            page: &page,
            offset_px: 4900.0,
            row_px: 20.0,
            label_static: false,
        }
        .render(area, &mut buf);
        assert!(row_text(&buf, 5).starts_with("Pricing"));
        assert!(row_text(&buf, 7).contains("Starter"));
    }

    #[test]
    fn headline_scrolls_with_document_before_pinning() {
        let page = page();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        // Headline at 3900px; offset 3800 puts it on row 5.
        ContentView {
            page: &page,
            offset_px: 3800.0,
            row_px: 20.0,
            label_static: false,
        }
        .render(area, &mut buf);
        assert!(row_text(&buf, 5).contains("Pick the plan"));
        assert!(!row_text(&buf, 0).contains("Pick the plan"));
    }
}
