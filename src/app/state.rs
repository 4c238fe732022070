//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! The scroll offset is only ever written through [`AppState::apply_scroll`]
//! and [`AppState::jump_to`], after the governor has had its say.

use std::time::Instant;

use crate::config::AppConfig;
use crate::core::{
    capacity::CapacityConfig,
    geometry::{probe, GeometrySnapshot, ScrollSample},
    governor::Engaged,
    stage::{DerivedState, Stage, StageConfig},
};

use super::page::PageGeometry;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// Top-level application state.
pub struct AppState {
    pub config: AppConfig,
    /// Scroll orchestration for the page.
    pub stage: Stage,
    pub capacity: CapacityConfig,
    /// Measured document for the current viewport.
    pub page: PageGeometry,
    /// Current scroll position in document pixels.
    pub offset_px: f64,
    pub viewport: Viewport,
    /// Thumbnails shown on each side of the hero title.
    pub thumbnails_per_side: usize,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Event-loop tick counter (drives the damping indicator).
    pub tick: u64,
    /// Damping windows opened since the last drain; the event loop schedules
    /// a wake-up for each.
    pub pending_timers: Vec<Engaged>,
    started: Instant,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        stage_config: StageConfig,
        capacity: CapacityConfig,
        viewport: Viewport,
    ) -> Self {
        let page = PageGeometry::measure(&stage_config, page_rows(viewport), config.display.row_px);
        let geometry = probe(&page.layout, 0.0, page.viewport_height_px, config.nav_margin_px);
        let sample = ScrollSample::new(0.0, page.viewport_height_px, 0);
        let stage = Stage::mount(stage_config, sample, &geometry);
        let thumbnails_per_side =
            capacity.visible_count(thumbnail_container_px(viewport, config.display.col_px));

        Self {
            config,
            stage,
            capacity,
            page,
            offset_px: 0.0,
            viewport,
            thumbnails_per_side,
            should_quit: false,
            status_message: None,
            tick: 0,
            pending_timers: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Milliseconds since the page was mounted.
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn derived(&self) -> DerivedState {
        self.stage.state()
    }

    /// One consistent geometry read for the current offset.
    pub fn geometry(&self) -> GeometrySnapshot {
        probe(
            &self.page.layout,
            self.offset_px,
            self.page.viewport_height_px,
            self.config.nav_margin_px,
        )
    }

    /// Sample the page and run the stage pipeline.
    pub fn resample(&mut self, now_ms: u64) {
        let sample = ScrollSample::new(self.offset_px, self.page.viewport_height_px, now_ms);
        let geometry = self.geometry();
        let update = self.stage.recompute(sample, &geometry);
        if let Some(engaged) = update.engaged {
            self.pending_timers.push(engaged);
        }
    }

    /// Move by an already-governed delta and resample.
    pub fn apply_scroll(&mut self, delta_px: f64, now_ms: u64) {
        self.jump_to(self.offset_px + delta_px, now_ms);
    }

    /// Programmatic jump (Home/End), not subject to damping.
    pub fn jump_to(&mut self, offset_px: f64, now_ms: u64) {
        self.offset_px = offset_px.clamp(0.0, self.page.max_offset_px());
        self.resample(now_ms);
    }

    /// Re-measure everything that depends on the terminal size.
    pub fn resize(&mut self, viewport: Viewport, now_ms: u64) {
        self.viewport = viewport;
        self.page = PageGeometry::measure(
            self.stage.config(),
            page_rows(viewport),
            self.config.display.row_px,
        );
        self.offset_px = self.offset_px.clamp(0.0, self.page.max_offset_px());
        self.thumbnails_per_side = self
            .capacity
            .visible_count(thumbnail_container_px(viewport, self.config.display.col_px));
        // Same pipeline as a scroll, at the offset the page actually holds.
        self.resample(now_ms);
    }

    pub fn wheel_step_px(&self) -> f64 {
        f64::from(self.config.display.wheel_rows) * self.config.display.row_px
    }

    pub fn page_step_px(&self) -> f64 {
        self.page.viewport_height_px
    }
}

/// Rows available to the page itself (minus nav bar and status bar).
pub fn page_rows(viewport: Viewport) -> u16 {
    viewport.rows.saturating_sub(2)
}

/// Inner width of the hero panel (inside its borders), in pixels.
pub fn thumbnail_container_px(viewport: Viewport, col_px: f64) -> f64 {
    f64::from(viewport.cols.saturating_sub(2)) * col_px
}
