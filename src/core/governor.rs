//! Soft-stop scroll governor.
//!
//! When the offset first crosses the damping threshold on a forward pass, the
//! governor takes over wheel input for a short window and replaces each event
//! with a small fixed step in the same direction.  It fires once per pass:
//! only scrolling back before the threshold re-arms it.
//!
//! The governor never touches the scroll position itself.  It answers
//! [`WheelDecision`]s and the host applies whichever delta it is told to.

use tracing::debug;

use super::error::ConfigError;

/// Damping parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingConfig {
    /// Fraction of the virtual height at which damping engages.
    pub threshold_fraction: f64,
    pub window_ms: u64,
    pub step_px: f64,
}

impl Default for DampingConfig {
    fn default() -> Self {
        Self {
            threshold_fraction: 0.85,
            window_ms: 500,
            step_px: 8.0,
        }
    }
}

impl DampingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = self.threshold_fraction;
        if !(f.is_finite() && f > 0.0 && f <= 1.0) {
            return Err(ConfigError::DampingThreshold(f));
        }
        if self.window_ms == 0 {
            return Err(ConfigError::DampingWindow);
        }
        if !(self.step_px.is_finite() && self.step_px > 0.0) {
            return Err(ConfigError::DampingStep(self.step_px));
        }
        Ok(())
    }

    /// Absolute trigger offset for the current virtual height.
    pub fn threshold_px(&self, virtual_height_px: f64) -> f64 {
        virtual_height_px * self.threshold_fraction
    }
}

// ───────────────────────────────────────── state ─────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Armed; the next forward crossing engages damping.
    Idle,
    Damping { expires_at_ms: u64 },
    /// Window ran out on this pass; waits for a retreat.
    Spent,
}

/// Externally visible governor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GovernorState {
    pub active: bool,
    pub window_expires_at_ms: Option<u64>,
}

/// What the host should do with an intercepted wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDecision {
    /// Apply the raw delta.
    PassThrough,
    /// Cancel the raw delta and scroll by `step_px` instead.
    Replace { step_px: f64 },
}

/// Reported when [`Governor::observe`] engages damping, so the host can
/// schedule a wake-up at `expires_at_ms` tagged with `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engaged {
    pub generation: u64,
    pub expires_at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Governor {
    config: DampingConfig,
    phase: Phase,
    /// Bumped whenever a pending window is cancelled or replaced; timer
    /// callbacks carrying an older value are ignored.
    generation: u64,
}

impl Governor {
    pub fn new(config: DampingConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    /// A governor that has already fired on the current pass.
    pub fn spent(config: DampingConfig) -> Self {
        Self {
            phase: Phase::Spent,
            ..Self::new(config)
        }
    }

    pub fn state(&self) -> GovernorState {
        match self.phase {
            Phase::Damping { expires_at_ms } => GovernorState {
                active: true,
                window_expires_at_ms: Some(expires_at_ms),
            },
            Phase::Idle | Phase::Spent => GovernorState::default(),
        }
    }

    /// Feed the offset after a recompute.
    pub fn observe(&mut self, offset_px: f64, threshold_px: f64, now_ms: u64) -> Option<Engaged> {
        let beyond = offset_px > threshold_px;

        if !beyond {
            if self.phase != Phase::Idle {
                debug!(offset_px, threshold_px, "governor re-armed by retreat");
                self.generation = self.generation.wrapping_add(1);
                self.phase = Phase::Idle;
            }
            return None;
        }

        match self.phase {
            Phase::Idle => {
                let expires_at_ms = now_ms.saturating_add(self.config.window_ms);
                self.generation = self.generation.wrapping_add(1);
                self.phase = Phase::Damping { expires_at_ms };
                debug!(offset_px, expires_at_ms, "governor damping engaged");
                Some(Engaged {
                    generation: self.generation,
                    expires_at_ms,
                })
            }
            Phase::Damping { expires_at_ms } => {
                if now_ms >= expires_at_ms {
                    self.spend();
                }
                None
            }
            Phase::Spent => None,
        }
    }

    /// Decide what to do with a raw wheel delta (positive = forward).
    pub fn intercept(&mut self, delta_px: f64, now_ms: u64) -> WheelDecision {
        let Phase::Damping { expires_at_ms } = self.phase else {
            return WheelDecision::PassThrough;
        };
        if now_ms >= expires_at_ms {
            self.spend();
            return WheelDecision::PassThrough;
        }
        if delta_px == 0.0 || !delta_px.is_finite() {
            return WheelDecision::PassThrough;
        }
        WheelDecision::Replace {
            step_px: self.config.step_px.copysign(delta_px),
        }
    }

    /// Timer callback for the window scheduled by [`Engaged`].
    ///
    /// Stale or early callbacks are no-ops.  Returns `true` when the window
    /// was actually closed.
    pub fn expire(&mut self, generation: u64, now_ms: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.phase {
            Phase::Damping { expires_at_ms } if now_ms >= expires_at_ms => {
                self.spend();
                true
            }
            _ => false,
        }
    }

    /// Drop any pending window without re-arming (used on teardown).
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if matches!(self.phase, Phase::Damping { .. }) {
            self.phase = Phase::Spent;
        }
    }

    fn spend(&mut self) {
        debug!("governor damping window elapsed");
        self.phase = Phase::Spent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 3400.0;

    fn governor() -> Governor {
        Governor::new(DampingConfig::default())
    }

    #[test]
    fn idle_passes_input_through() {
        let mut g = governor();
        assert!(g.observe(1000.0, THRESHOLD, 0).is_none());
        assert_eq!(g.intercept(60.0, 10), WheelDecision::PassThrough);
        assert_eq!(g.state(), GovernorState::default());
    }

    #[test]
    fn crossing_engages_and_replaces_input() {
        let mut g = governor();
        let engaged = g.observe(3410.0, THRESHOLD, 1000).unwrap();
        assert_eq!(engaged.expires_at_ms, 1500);
        assert_eq!(
            g.state(),
            GovernorState {
                active: true,
                window_expires_at_ms: Some(1500)
            }
        );
        assert_eq!(g.intercept(120.0, 1100), WheelDecision::Replace { step_px: 8.0 });
        assert_eq!(g.intercept(-40.0, 1200), WheelDecision::Replace { step_px: -8.0 });
        assert_eq!(g.intercept(0.0, 1200), WheelDecision::PassThrough);
    }

    #[test]
    fn one_shot_per_forward_pass() {
        let mut g = governor();
        let engaged = g.observe(3410.0, THRESHOLD, 0).unwrap();
        assert!(g.expire(engaged.generation, 500));
        assert!(!g.state().active);

        // Keep scrolling forward past the threshold: no second brake.
        for (i, offset) in [3500.0, 3700.0, 3950.0].into_iter().enumerate() {
            assert!(g.observe(offset, THRESHOLD, 600 + i as u64 * 50).is_none());
            assert_eq!(g.intercept(60.0, 600 + i as u64 * 50), WheelDecision::PassThrough);
        }
    }

    #[test]
    fn expiry_without_timer_callback() {
        let mut g = governor();
        g.observe(3410.0, THRESHOLD, 0);
        assert_eq!(g.intercept(60.0, 501), WheelDecision::PassThrough);
        assert!(g.observe(3600.0, THRESHOLD, 520).is_none());
        assert!(!g.state().active);
    }

    #[test]
    fn retreat_mid_window_rearms() {
        let mut g = governor();
        let first = g.observe(3410.0, THRESHOLD, 0).unwrap();
        assert!(g.observe(3300.0, THRESHOLD, 200).is_none());
        assert!(!g.state().active);

        // The cancelled timer must not close the next window.
        let second = g.observe(3420.0, THRESHOLD, 300).unwrap();
        assert!(!g.expire(first.generation, 500));
        assert!(g.state().active);
        assert_eq!(second.expires_at_ms, 800);
        assert!(g.expire(second.generation, 800));
    }

    #[test]
    fn retreat_after_expiry_rearms() {
        let mut g = governor();
        let engaged = g.observe(3410.0, THRESHOLD, 0).unwrap();
        g.expire(engaged.generation, 500);
        g.observe(3000.0, THRESHOLD, 900);
        assert!(g.observe(3500.0, THRESHOLD, 1000).is_some());
    }

    #[test]
    fn early_timer_is_ignored() {
        let mut g = governor();
        let engaged = g.observe(3410.0, THRESHOLD, 0).unwrap();
        assert!(!g.expire(engaged.generation, 499));
        assert!(g.state().active);
    }

    #[test]
    fn cancel_drops_pending_window() {
        let mut g = governor();
        let engaged = g.observe(3410.0, THRESHOLD, 0).unwrap();
        g.cancel();
        assert!(!g.state().active);
        assert!(!g.expire(engaged.generation, 600));
    }

    #[test]
    fn spent_governor_waits_for_retreat() {
        let mut g = Governor::spent(DampingConfig::default());
        assert!(g.observe(3800.0, THRESHOLD, 0).is_none());
        g.observe(100.0, THRESHOLD, 10);
        assert!(g.observe(3800.0, THRESHOLD, 20).is_some());
    }

    #[test]
    fn config_validation() {
        assert!(DampingConfig::default().validate().is_ok());
        let bad = DampingConfig {
            window_ms: 0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::DampingWindow));
        let bad = DampingConfig {
            threshold_fraction: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = DampingConfig {
            step_px: f64::NAN,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
