//! Band mapping — scroll offset → normalized progress → section index.
//!
//! The scroll region of the hero is a "virtual height" that is a multiple of
//! the live viewport height.  It is recomputed from every sample so that a
//! resize immediately re-bands every threshold that depends on it.

use super::error::ConfigError;

// ───────────────────────────────────────── progress ──────────

/// Height of the virtual scroll region for the current viewport.
pub fn virtual_height_px(viewport_height_px: f64, multiplier: f64) -> f64 {
    (viewport_height_px.max(0.0) * multiplier).max(0.0)
}

/// Normalized progress through the virtual region, clamped to `[0, 1]`.
///
/// A zero-height region (viewport not laid out yet) and NaN offsets count
/// as "not started".
pub fn progress(offset_px: f64, virtual_height_px: f64) -> f64 {
    if virtual_height_px <= 0.0 {
        return 0.0;
    }
    let ratio = offset_px / virtual_height_px;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

// ───────────────────────────────────────── sections ──────────

/// One narrative section and the progress band that activates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub index: usize,
    /// Half-open activation band `[low, high)`.
    pub band: (f64, f64),
}

/// Partition of `[0, 1)` into section bands.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    /// Start of each band; `starts[0] == 0.0`, strictly increasing.
    starts: Vec<f64>,
    /// Equal-width bands use `floor(progress × N)` directly.
    uniform: bool,
}

impl Sections {
    /// `count` equal-width bands.
    pub fn equal(count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::SectionCount(count));
        }
        let starts = (0..count).map(|i| i as f64 / count as f64).collect();
        Ok(Self {
            starts,
            uniform: true,
        })
    }

    /// Custom band starts, e.g. `[0.0, 0.2, 0.5, 0.9]`.
    pub fn with_starts(starts: Vec<f64>) -> Result<Self, ConfigError> {
        if starts.is_empty() {
            return Err(ConfigError::SectionCount(0));
        }
        let well_formed = starts[0] == 0.0
            && starts.iter().all(|s| s.is_finite() && *s < 1.0)
            && starts.windows(2).all(|w| w[0] < w[1]);
        if !well_formed {
            return Err(ConfigError::SectionStarts(starts));
        }
        Ok(Self {
            starts,
            uniform: false,
        })
    }

    pub fn count(&self) -> usize {
        self.starts.len()
    }

    /// The section whose band contains `progress`.
    ///
    /// Always within `[0, count - 1]`, even for progress outside `[0, 1]`.
    pub fn index_for(&self, progress: f64) -> usize {
        let last = self.starts.len() - 1;
        if !progress.is_finite() || progress <= 0.0 {
            return 0;
        }
        if self.uniform {
            let raw = (progress * self.starts.len() as f64).floor();
            return (raw as usize).min(last);
        }
        // Bands at or below `progress`, minus the one we're inside.
        let reached = self.starts.partition_point(|&start| start <= progress);
        reached.saturating_sub(1).min(last)
    }

    /// Band descriptors in order.
    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        self.starts.iter().enumerate().map(move |(index, &low)| {
            let high = self.starts.get(index + 1).copied().unwrap_or(1.0);
            Section {
                index,
                band: (low, high),
            }
        })
    }
}

impl Default for Sections {
    /// Four equal narrative sections.
    fn default() -> Self {
        Self {
            starts: vec![0.0, 0.25, 0.5, 0.75],
            uniform: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_both_ends() {
        assert_eq!(progress(-50.0, 4000.0), 0.0);
        assert_eq!(progress(2000.0, 4000.0), 0.5);
        assert_eq!(progress(9000.0, 4000.0), 1.0);
    }

    #[test]
    fn zero_virtual_height_is_not_started() {
        assert_eq!(progress(300.0, 0.0), 0.0);
    }

    #[test]
    fn infinite_offsets_clamp_nan_does_not() {
        assert_eq!(progress(f64::INFINITY, 4000.0), 1.0);
        assert_eq!(progress(f64::NEG_INFINITY, 4000.0), 0.0);
        assert_eq!(progress(f64::NAN, 4000.0), 0.0);
    }

    #[test]
    fn virtual_height_follows_viewport() {
        assert_eq!(virtual_height_px(1000.0, 4.0), 4000.0);
        assert_eq!(virtual_height_px(500.0, 4.0), 2000.0);
    }

    #[test]
    fn equal_bands_match_floor_formula() {
        let sections = Sections::equal(4).unwrap();
        for step in 0..=200 {
            let p = step as f64 / 200.0;
            let expected = ((p * 4.0).floor() as usize).min(3);
            assert_eq!(sections.index_for(p), expected, "progress {p}");
        }
    }

    #[test]
    fn index_stays_in_range_for_wild_progress() {
        let sections = Sections::equal(5).unwrap();
        for p in [-3.0, -0.0001, 1.0, 1.5, 40.0, f64::NAN, f64::INFINITY] {
            assert!(sections.index_for(p) < 5, "progress {p}");
        }
        assert_eq!(sections.index_for(1.7), 4);
    }

    #[test]
    fn single_section_is_always_zero() {
        let sections = Sections::equal(1).unwrap();
        assert_eq!(sections.index_for(0.0), 0);
        assert_eq!(sections.index_for(0.99), 0);
        assert_eq!(sections.index_for(1.0), 0);
    }

    #[test]
    fn default_is_four_equal_bands() {
        assert_eq!(Sections::default(), Sections::equal(4).unwrap());
    }

    #[test]
    fn zero_sections_rejected() {
        assert_eq!(Sections::equal(0), Err(ConfigError::SectionCount(0)));
    }

    #[test]
    fn custom_starts() {
        let sections = Sections::with_starts(vec![0.0, 0.1, 0.6]).unwrap();
        assert_eq!(sections.index_for(0.05), 0);
        assert_eq!(sections.index_for(0.1), 1);
        assert_eq!(sections.index_for(0.59), 1);
        assert_eq!(sections.index_for(0.8), 2);
        let bands: Vec<_> = sections.iter().map(|s| s.band).collect();
        assert_eq!(bands, vec![(0.0, 0.1), (0.1, 0.6), (0.6, 1.0)]);
    }

    #[test]
    fn malformed_starts_rejected() {
        assert!(Sections::with_starts(vec![0.1, 0.5]).is_err());
        assert!(Sections::with_starts(vec![0.0, 0.5, 0.5]).is_err());
        assert!(Sections::with_starts(vec![0.0, 1.0]).is_err());
        assert!(Sections::with_starts(vec![]).is_err());
    }
}
