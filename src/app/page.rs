//! Document model of the landing page.
//!
//! The page is a tall hero scroll region (the virtual height plus one
//! viewport, so the hero can stay pinned for the whole region) followed by the
//! content sections.  Reference elements are placed in document pixels and
//! re-measured whenever the viewport changes.

use crate::core::geometry::{ElementBox, PageLayout};
use crate::core::stage::StageConfig;

/// Content below the hero, in viewports.
pub const CONTENT_VIEWPORTS: f64 = 3.0;

/// Narrative copy for the hero sections, cycled when there are more sections.
pub const SECTION_COPY: &[(&str, &str)] = &[
    ("Plan", "Sketch the route before the first step."),
    ("Draw", "Every scroll traces the path a little further."),
    ("Ship", "The line lands where the story does."),
    ("Grow", "Pick a plan and keep the momentum."),
];

/// Content blocks after the hero, in document order.
pub const CONTENT_BLOCKS: &[(&str, &[&str])] = &[
    (
        "Pricing",
        &[
            "Starter   free      one project, community support",
            "Team      $12/seat  shared workspaces, priority support",
            "Scale     custom    SSO, audit trails, dedicated contact",
        ],
    ),
    (
        "Questions",
        &[
            "Can I switch plans later?  Yes, changes apply next cycle.",
            "Is there a trial?  Team plans include fourteen days free.",
        ],
    ),
    (
        "What people say",
        &[
            "\"The first landing page our readers finished.\"",
            "\"Scrolling it feels deliberate, not mechanical.\"",
        ],
    ),
];

/// Below this many rows the headline is not laid out at all.
const MIN_HEADLINE_ROWS: u16 = 8;

/// Measured page for one viewport size.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    pub layout: PageLayout,
    pub viewport_height_px: f64,
    pub virtual_height_px: f64,
    pub document_height_px: f64,
}

impl PageGeometry {
    pub fn measure(config: &StageConfig, rows: u16, row_px: f64) -> Self {
        let viewport = f64::from(rows) * row_px;
        let virtual_height = config.virtual_height_px(viewport);
        let hero = ElementBox::new(0.0, virtual_height + viewport);

        // The headline enters from mid-screen once the hero collapses and
        // reaches the sticky line a few hundred pixels later.
        let collapse_at = config.hysteresis.collapse_threshold * virtual_height;
        let headline = (rows >= MIN_HEADLINE_ROWS)
            .then(|| ElementBox::new(collapse_at + viewport * 0.5, row_px * 2.0));

        // Start of the content sections.
        let nav_anchor = ElementBox::new(hero.bottom_px(), row_px);

        Self {
            layout: PageLayout {
                hero: Some(hero),
                headline,
                nav_anchor: Some(nav_anchor),
            },
            viewport_height_px: viewport,
            virtual_height_px: virtual_height,
            document_height_px: hero.bottom_px() + viewport * CONTENT_VIEWPORTS,
        }
    }

    pub fn max_offset_px(&self) -> f64 {
        (self.document_height_px - self.viewport_height_px).max(0.0)
    }

    /// Document y where the content sections begin.
    pub fn content_top_px(&self) -> f64 {
        self.layout
            .hero
            .map(|h| h.bottom_px())
            .unwrap_or(self.virtual_height_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_spans_virtual_height_plus_viewport() {
        let page = PageGeometry::measure(&StageConfig::default(), 50, 20.0);
        assert_eq!(page.viewport_height_px, 1000.0);
        assert_eq!(page.virtual_height_px, 4000.0);
        assert_eq!(page.layout.hero, Some(ElementBox::new(0.0, 5000.0)));
        assert_eq!(page.content_top_px(), 5000.0);
        assert_eq!(page.max_offset_px(), 5000.0 + 3000.0 - 1000.0);
    }

    #[test]
    fn headline_starts_below_sticky_line_at_collapse() {
        let page = PageGeometry::measure(&StageConfig::default(), 50, 20.0);
        let headline = page.layout.headline.unwrap();
        let collapse_offset = 0.85 * 4000.0;
        assert_eq!(headline.top_px - collapse_offset, 500.0);
    }

    #[test]
    fn tiny_terminal_has_no_headline() {
        let page = PageGeometry::measure(&StageConfig::default(), 5, 20.0);
        assert!(page.layout.headline.is_none());
        assert!(page.layout.nav_anchor.is_some());
    }
}
