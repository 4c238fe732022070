//! Sticky-layout flags with dwell and direction rules.
//!
//! Every flag is re-derived from the current sample and geometry on each
//! tick.  The only carried state is the collapse origin: the offset at which
//! the hero last collapsed, used to hold the static label back until the
//! user has scrolled a little further.

use tracing::debug;

use super::error::{check_pixels, ConfigError};

/// Thresholds for the four flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HysteresisConfig {
    /// Progress above which the hero collapses.
    pub collapse_threshold: f64,
    /// Forward scroll required after collapse before the label goes static.
    pub dwell_px: f64,
    /// Offset past which the scroll prompt hides.
    pub prompt_hide_px: f64,
    /// Headline top (viewport-relative) at or above which it may stick.
    pub sticky_label_px: f64,
}

impl Default for HysteresisConfig {
    fn default() -> Self {
        Self {
            collapse_threshold: 0.85,
            dwell_px: 100.0,
            prompt_hide_px: 100.0,
            sticky_label_px: 90.0,
        }
    }
}

impl HysteresisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.collapse_threshold;
        if !(t.is_finite() && t > 0.0 && t < 1.0) {
            return Err(ConfigError::CollapseThreshold(t));
        }
        check_pixels("dwell_px", self.dwell_px)?;
        check_pixels("prompt_hide_px", self.prompt_hide_px)?;
        // Sticky threshold is a viewport position and may legitimately be 0.
        if !self.sticky_label_px.is_finite() {
            return Err(ConfigError::Pixels {
                name: "sticky_label_px",
                value: self.sticky_label_px,
            });
        }
        Ok(())
    }
}

/// The four boolean layout flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub hero_collapsed: bool,
    pub nav_compact: bool,
    pub label_static: bool,
    pub scroll_prompt_hidden: bool,
}

/// Inputs for one flag derivation.
#[derive(Debug, Clone, Copy)]
pub struct FlagInputs {
    pub offset_px: f64,
    pub progress: f64,
    pub headline_top_px: Option<f64>,
    pub nav_anchor_intersecting: Option<bool>,
}

/// Owner of the collapse origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hysteresis {
    collapse_origin_px: Option<f64>,
}

impl Hysteresis {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn collapse_origin_px(&self) -> Option<f64> {
        self.collapse_origin_px
    }

    /// Derive the flags for this tick from `inputs` and the previous flags.
    pub fn step(&mut self, inputs: FlagInputs, previous: Flags, config: &HysteresisConfig) -> Flags {
        let scroll_prompt_hidden = inputs.offset_px > config.prompt_hide_px;

        let hero_collapsed = inputs.progress > config.collapse_threshold;
        if hero_collapsed {
            if !previous.hero_collapsed || self.collapse_origin_px.is_none() {
                self.collapse_origin_px = Some(inputs.offset_px);
                debug!(origin = inputs.offset_px, "hero collapsed");
            }
        } else {
            if previous.hero_collapsed {
                debug!(offset = inputs.offset_px, "hero expanded");
            }
            self.collapse_origin_px = None;
        }

        let label_static = match (hero_collapsed, inputs.headline_top_px) {
            (false, _) => false,
            // Headline detached for a moment: hold whatever we showed last.
            (true, None) => previous.label_static,
            (true, Some(headline_top)) => {
                let dwelled = self
                    .collapse_origin_px
                    .is_some_and(|origin| inputs.offset_px - origin > config.dwell_px);
                dwelled && headline_top <= config.sticky_label_px
            }
        };

        let nav_compact = inputs
            .nav_anchor_intersecting
            .unwrap_or(previous.nav_compact);

        let flags = Flags {
            hero_collapsed,
            nav_compact,
            label_static,
            scroll_prompt_hidden,
        };
        if flags != previous {
            debug!(?flags, "layout flags changed");
        }
        flags
    }
}
