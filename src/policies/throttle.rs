//! # Throttle gate for rate-limited subscriptions.
//!
//! [`ThrottleGate`] implements the per-subscription half of throttling: it
//! remembers the instant of the last **admitted** delivery and rejects any
//! delivery that arrives strictly inside the configured window.
//!
//! ## Rules
//! - The first delivery is always admitted (there is no prior admission).
//! - An admitted delivery records its instant as the new reference point.
//! - A rejected delivery records **nothing**: the window keeps counting from
//!   the last admission, so a steady stream of emits is sampled at the window
//!   rate instead of being silenced entirely.
//!
//! Instants come from [`tokio::time::Instant`], so tests driving the paused
//! clock observe deterministic gating.
//!
//! ```text
//! window = 100ms:   admit t=0 ── reject t=50 ── admit t=150 ── reject t=200
//!                     └─ reference point moves only on admission
//! ```

use std::time::Duration;

use tokio::time::Instant;

/// Rate gate for one throttled subscription.
///
/// Created lazily on the first throttle-gated delivery and dropped when the
/// subscription is removed. The window is fixed at creation; subscription
/// options are immutable after registration.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ThrottleGate {
    window: Duration,
    last: Option<Instant>,
}

impl ThrottleGate {
    /// Creates a gate that admits at most one delivery per `window`.
    pub(crate) fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Decides whether a delivery at `now` passes the gate.
    ///
    /// Returns `true` and records `now` as the new reference point when the
    /// elapsed interval since the last admission is at least the window (or
    /// there was no prior admission). Returns `false` and records nothing
    /// otherwise.
    pub(crate) fn admit(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
