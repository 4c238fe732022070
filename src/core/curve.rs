//! Path-draw pacing — a piecewise-linear easing curve over global progress.
//!
//! The breakpoint table front-loads a slow reveal, accelerates through the
//! middle and settles, finishing the draw before the scroll region ends.

use super::error::ConfigError;

/// Slow–fast–slow–fast pacing, done at 85% of the region.
pub const DEFAULT_BREAKPOINTS: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.15, 0.05),
    (0.30, 0.25),
    (0.45, 0.45),
    (0.55, 0.55),
    (0.62, 0.65),
    (0.70, 0.78),
    (0.78, 0.92),
    (0.85, 1.0),
];

/// Validated `(input, output)` breakpoint table.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCurve {
    points: Vec<(f64, f64)>,
}

impl PathCurve {
    /// Validate a breakpoint table.
    ///
    /// Inputs must strictly increase, outputs must not decrease, everything
    /// lies in `[0, 1]` and the final output is `1.0`.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        if points.len() < 2 {
            return Err(ConfigError::TooFewBreakpoints(points.len()));
        }
        for (index, &(input, output)) in points.iter().enumerate() {
            let in_range = |v: f64| v.is_finite() && (0.0..=1.0).contains(&v);
            if !in_range(input) || !in_range(output) {
                return Err(ConfigError::BreakpointOutOfRange {
                    index,
                    input,
                    output,
                });
            }
        }
        for (i, pair) in points.windows(2).enumerate() {
            let ((in0, out0), (in1, out1)) = (pair[0], pair[1]);
            if in1 <= in0 {
                return Err(ConfigError::BreakpointInputOrder {
                    index: i + 1,
                    previous: in0,
                    current: in1,
                });
            }
            if out1 < out0 {
                return Err(ConfigError::BreakpointOutputOrder {
                    index: i + 1,
                    previous: out0,
                    current: out1,
                });
            }
        }
        let last = points[points.len() - 1].1;
        if last != 1.0 {
            return Err(ConfigError::BreakpointUnfinished(last));
        }
        Ok(Self { points })
    }

    /// Draw progress for a global progress value.
    pub fn sample(&self, progress: f64) -> f64 {
        let (first_in, first_out) = self.points[0];
        let (last_in, _) = self.points[self.points.len() - 1];

        if progress.is_nan() || progress <= first_in {
            return first_out;
        }
        if progress >= last_in {
            return 1.0;
        }

        // First breakpoint strictly past `progress`; its predecessor is ≤.
        let hi = self.points.partition_point(|&(input, _)| input <= progress);
        let (x0, y0) = self.points[hi - 1];
        let (x1, y1) = self.points[hi];
        let t = (progress - x0) / (x1 - x0);
        (y0 + (y1 - y0) * t).clamp(0.0, 1.0)
    }
}

impl Default for PathCurve {
    fn default() -> Self {
        Self {
            points: DEFAULT_BREAKPOINTS.to_vec(),
        }
    }
}
