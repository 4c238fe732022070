//! Damping-window wake-ups.
//!
//! Each opened window gets a sleeping task that posts
//! [`AppEvent::DampingExpired`] back into the event loop.  Handles are kept so
//! teardown can abort whatever is still pending; a wake-up that lands after
//! the page is gone finds a closed channel or an unmounted stage and does
//! nothing.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::governor::Engaged;

use super::event::AppEvent;

#[derive(Default)]
pub struct TimerRuntime {
    pending: Vec<JoinHandle<()>>,
}

impl TimerRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep until the window closes, then notify the loop.
    pub fn schedule(&mut self, tx: mpsc::UnboundedSender<AppEvent>, engaged: Engaged, now_ms: u64) {
        self.pending.retain(|handle| !handle.is_finished());
        let wait = Duration::from_millis(engaged.expires_at_ms.saturating_sub(now_ms));
        tracing::debug!(generation = engaged.generation, ?wait, "damping timer scheduled");
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            let _ = tx.send(AppEvent::DampingExpired(engaged.generation));
        }));
    }

    /// Abort every pending wake-up.
    pub fn shutdown(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}
