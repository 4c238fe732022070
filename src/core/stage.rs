//! The sampling pipeline and its lifecycle.
//!
//! [`Stage`] is the single entry point for every trigger (scroll, resize,
//! visibility change).  Each call runs the band mapper, the path curve and
//! the hysteresis rules in that order, then lets the governor observe the
//! result.  Presentation code only ever sees the [`DerivedState`] snapshot.

use tracing::{debug, info, warn};

use super::band::{self, Sections};
use super::curve::PathCurve;
use super::error::ConfigError;
use super::geometry::{GeometrySnapshot, ScrollSample};
use super::governor::{DampingConfig, Engaged, Governor, GovernorState, WheelDecision};
use super::hysteresis::{FlagInputs, Flags, Hysteresis, HysteresisConfig};

// ───────────────────────────────────────── config ────────────

/// Validated stage configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    pub sections: Sections,
    pub virtual_height_multiplier: f64,
    pub curve: PathCurve,
    pub hysteresis: HysteresisConfig,
    pub damping: DampingConfig,
}

impl StageConfig {
    pub fn new(
        sections: Sections,
        virtual_height_multiplier: f64,
        curve: PathCurve,
        hysteresis: HysteresisConfig,
        damping: DampingConfig,
    ) -> Result<Self, ConfigError> {
        let m = virtual_height_multiplier;
        if !(m.is_finite() && m > 0.0) {
            return Err(ConfigError::VirtualHeightMultiplier(m));
        }
        hysteresis.validate()?;
        damping.validate()?;
        Ok(Self {
            sections,
            virtual_height_multiplier,
            curve,
            hysteresis,
            damping,
        })
    }

    pub fn virtual_height_px(&self, viewport_height_px: f64) -> f64 {
        band::virtual_height_px(viewport_height_px, self.virtual_height_multiplier)
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            sections: Sections::default(),
            virtual_height_multiplier: 4.0,
            curve: PathCurve::default(),
            hysteresis: HysteresisConfig::default(),
            damping: DampingConfig::default(),
        }
    }
}

// ───────────────────────────────────────── snapshot ──────────

/// Everything the presentation layer reads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedState {
    pub section_index: usize,
    pub progress: f64,
    pub path_progress: f64,
    pub hero_collapsed: bool,
    pub nav_compact: bool,
    pub label_static: bool,
    pub scroll_prompt_hidden: bool,
}

impl DerivedState {
    pub fn flags(&self) -> Flags {
        Flags {
            hero_collapsed: self.hero_collapsed,
            nav_compact: self.nav_compact,
            label_static: self.label_static,
            scroll_prompt_hidden: self.scroll_prompt_hidden,
        }
    }
}

/// One full recomputation.
///
/// Only the hysteresis fields look at `previous`; `hysteresis` carries the
/// collapse origin.  Repeating a call with the same inputs and the same
/// previous snapshot yields the same result.
pub fn derive(
    config: &StageConfig,
    sample: &ScrollSample,
    geometry: &GeometrySnapshot,
    previous: &DerivedState,
    hysteresis: &mut Hysteresis,
) -> DerivedState {
    let virtual_height = config.virtual_height_px(sample.viewport_height_px);
    let progress = band::progress(sample.offset_px, virtual_height);
    let section_index = config.sections.index_for(progress);
    let path_progress = config.curve.sample(progress);

    let flags = hysteresis.step(
        FlagInputs {
            offset_px: sample.offset_px,
            progress,
            headline_top_px: geometry.headline_top_px,
            nav_anchor_intersecting: geometry.nav_anchor_intersecting,
        },
        previous.flags(),
        &config.hysteresis,
    );

    DerivedState {
        section_index,
        progress,
        path_progress,
        hero_collapsed: flags.hero_collapsed,
        nav_compact: flags.nav_compact,
        label_static: flags.label_static,
        scroll_prompt_hidden: flags.scroll_prompt_hidden,
    }
}

// ───────────────────────────────────────── stage ─────────────

fn is_incomplete(geometry: &GeometrySnapshot) -> bool {
    geometry.hero_top_px.is_none()
        || geometry.hero_height_px.is_none()
        || geometry.headline_top_px.is_none()
        || geometry.nav_anchor_intersecting.is_none()
}

/// Result of a recompute: the new snapshot plus a damping window the host
/// must schedule a wake-up for, if one just opened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Update {
    pub state: DerivedState,
    pub engaged: Option<Engaged>,
}

/// Per-page orchestration state, alive between mount and unmount.
#[derive(Debug)]
pub struct Stage {
    config: StageConfig,
    hysteresis: Hysteresis,
    governor: Governor,
    state: DerivedState,
    last_sample: ScrollSample,
    mounted: bool,
    /// Some reference element was absent on the last sample.
    geometry_incomplete: bool,
}

impl Stage {
    /// Create all state from the first sample.
    ///
    /// A page restored past the damping threshold starts with the governor
    /// already spent; the soft stop only applies to a live forward pass.
    pub fn mount(config: StageConfig, sample: ScrollSample, geometry: &GeometrySnapshot) -> Self {
        let mut hysteresis = Hysteresis::new();
        let state = derive(
            &config,
            &sample,
            geometry,
            &DerivedState::default(),
            &mut hysteresis,
        );

        let threshold = config
            .damping
            .threshold_px(config.virtual_height_px(sample.viewport_height_px));
        let governor = if sample.offset_px > threshold {
            Governor::spent(config.damping)
        } else {
            Governor::new(config.damping)
        };

        let geometry_incomplete = is_incomplete(geometry);
        if geometry_incomplete {
            warn!(?geometry, "reference element missing at mount");
        }
        info!(
            offset_px = sample.offset_px,
            viewport_height_px = sample.viewport_height_px,
            sections = config.sections.count(),
            "stage mounted"
        );
        Self {
            config,
            hysteresis,
            governor,
            state,
            last_sample: sample,
            mounted: true,
            geometry_incomplete,
        }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn state(&self) -> DerivedState {
        self.state
    }

    pub fn governor_state(&self) -> GovernorState {
        self.governor.state()
    }

    #[cfg(test)]
    pub fn last_sample(&self) -> ScrollSample {
        self.last_sample
    }

    #[cfg(test)]
    pub fn geometry_incomplete(&self) -> bool {
        self.geometry_incomplete
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Run the full pipeline for a new sample.
    pub fn recompute(&mut self, sample: ScrollSample, geometry: &GeometrySnapshot) -> Update {
        if !self.mounted {
            return Update {
                state: self.state,
                engaged: None,
            };
        }
        let incomplete = is_incomplete(geometry);
        match (self.geometry_incomplete, incomplete) {
            (false, true) => {
                warn!(?geometry, "reference element missing; holding previous flags")
            }
            (true, false) => debug!("reference elements back"),
            _ => {}
        }
        self.geometry_incomplete = incomplete;
        if sample.viewport_height_px != self.last_sample.viewport_height_px {
            debug!(
                from = self.last_sample.viewport_height_px,
                to = sample.viewport_height_px,
                "viewport resized; re-banding"
            );
        }

        let state = derive(
            &self.config,
            &sample,
            geometry,
            &self.state,
            &mut self.hysteresis,
        );
        if state.section_index != self.state.section_index {
            debug!(
                from = self.state.section_index,
                to = state.section_index,
                "active section changed"
            );
        }

        let threshold = self
            .config
            .damping
            .threshold_px(self.config.virtual_height_px(sample.viewport_height_px));
        let engaged = self
            .governor
            .observe(sample.offset_px, threshold, sample.timestamp_ms);

        self.state = state;
        self.last_sample = sample;
        Update { state, engaged }
    }

    /// Must be asked before a wheel delta is applied to the scroll position.
    pub fn intercept_wheel(&mut self, delta_px: f64, now_ms: u64) -> WheelDecision {
        if !self.mounted {
            return WheelDecision::PassThrough;
        }
        self.governor.intercept(delta_px, now_ms)
    }

    /// Damping timer callback; a no-op after unmount or for a stale window.
    pub fn expire_damping(&mut self, generation: u64, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.governor.expire(generation, now_ms)
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.governor.cancel();
        info!("stage unmounted");
    }
}
