//! Setup-time faults.
//!
//! Runtime input is always clamped into range, so the only errors the core can
//! produce are configuration mistakes caught when a stage is built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("section_count must be at least 1 (got {0})")]
    SectionCount(usize),
    #[error("section_starts must begin at 0, stay below 1 and strictly increase (got {0:?})")]
    SectionStarts(Vec<f64>),
    #[error("virtual_height_multiplier must be a positive finite number (got {0})")]
    VirtualHeightMultiplier(f64),
    #[error("path curve needs at least two breakpoints (got {0})")]
    TooFewBreakpoints(usize),
    #[error("path breakpoint {index} ({input}, {output}) is outside [0, 1]")]
    BreakpointOutOfRange { index: usize, input: f64, output: f64 },
    #[error("path breakpoint inputs must strictly increase (index {index}: {previous} -> {current})")]
    BreakpointInputOrder { index: usize, previous: f64, current: f64 },
    #[error("path breakpoint outputs must not decrease (index {index}: {previous} -> {current})")]
    BreakpointOutputOrder { index: usize, previous: f64, current: f64 },
    #[error("last path breakpoint must output 1.0 (got {0})")]
    BreakpointUnfinished(f64),
    #[error("collapse_threshold must lie strictly between 0 and 1 (got {0})")]
    CollapseThreshold(f64),
    #[error("{name} must be a finite, non-negative number of pixels (got {value})")]
    Pixels { name: &'static str, value: f64 },
    #[error("damping.threshold_fraction must lie in (0, 1] (got {0})")]
    DampingThreshold(f64),
    #[error("damping.window_ms must be positive")]
    DampingWindow,
    #[error("damping.step_px must be a positive finite number (got {0})")]
    DampingStep(f64),
    #[error("thumbnail item width plus gap must be positive (got {0})")]
    ThumbnailPitch(f64),
    #[error("display cell size must be positive (row_px {row_px}, col_px {col_px})")]
    CellSize { row_px: f64, col_px: f64 },
}

/// Reject NaN, infinities and negative pixel quantities.
pub fn check_pixels(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Pixels { name, value })
    }
}
