//! Geometry probe — one consistent read of scroll and layout per tick.
//!
//! Reference elements are described in document coordinates by a
//! [`PageLayout`]; the probe turns them into viewport-relative positions for
//! the current offset.  Any element may be absent (mid re-layout), in which
//! case the snapshot carries `None` and consumers keep their previous value.

/// One scroll/resize/visibility input, sampled by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset_px: f64,
    pub viewport_height_px: f64,
    pub timestamp_ms: u64,
}

impl ScrollSample {
    pub fn new(offset_px: f64, viewport_height_px: f64, timestamp_ms: u64) -> Self {
        Self {
            offset_px,
            viewport_height_px,
            timestamp_ms,
        }
    }
}

/// Vertical extent of an element, in whichever coordinate space the caller uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top_px: f64,
    pub height_px: f64,
}

impl ElementBox {
    pub fn new(top_px: f64, height_px: f64) -> Self {
        Self { top_px, height_px }
    }

    pub fn bottom_px(&self) -> f64 {
        self.top_px + self.height_px
    }
}

/// Viewport-relative geometry read fresh on every sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub hero_top_px: Option<f64>,
    pub hero_height_px: Option<f64>,
    pub headline_top_px: Option<f64>,
    pub nav_anchor_intersecting: Option<bool>,
}

/// Document-space positions of the reference elements.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub hero: Option<ElementBox>,
    pub headline: Option<ElementBox>,
    pub nav_anchor: Option<ElementBox>,
}

/// Read the reference elements at `offset_px`.
///
/// The nav anchor counts as intersecting once its top is within
/// `nav_margin_px` of the viewport bottom, so the transition fires before the
/// anchor is actually on screen.  An anchor that has scrolled off the top
/// still counts: the reader is inside the content it marks.
pub fn probe(
    layout: &PageLayout,
    offset_px: f64,
    viewport_height_px: f64,
    nav_margin_px: f64,
) -> GeometrySnapshot {
    let to_viewport = |b: &ElementBox| b.top_px - offset_px;

    let nav_anchor_intersecting = layout.nav_anchor.as_ref().map(|anchor| {
        to_viewport(anchor) <= viewport_height_px + nav_margin_px
    });

    GeometrySnapshot {
        hero_top_px: layout.hero.as_ref().map(to_viewport),
        hero_height_px: layout.hero.map(|h| h.height_px),
        headline_top_px: layout.headline.as_ref().map(to_viewport),
        nav_anchor_intersecting,
    }
}
