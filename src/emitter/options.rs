//! # Per-subscription delivery options.
//!
//! [`ConsumerOptions`] customizes how one subscription receives emitted
//! values. Options are fixed at [`subscribe`](crate::Emitter::subscribe) time
//! and immutable afterwards.
//!
//! ## Knobs
//! - [`ConsumerOptions::priority`] — higher priorities are delivered earlier
//!   within one emit; equal priorities keep registration order.
//! - [`ConsumerOptions::once`] — the subscription is retired after its first
//!   broadcast delivery.
//! - [`ConsumerOptions::debounce`] — defer delivery until the window has been
//!   quiet; only the newest value within the window is delivered.
//! - [`ConsumerOptions::throttle`] — drop deliveries arriving inside the
//!   window since the last admitted one.
//!
//! Debounce and throttle are independent; when both are set, throttle gates
//! first and a throttled-out delivery never reschedules the debounce.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use cadent::ConsumerOptions;
//!
//! let opts = ConsumerOptions::new()
//!     .with_priority(10)
//!     .with_throttle(Duration::from_millis(250));
//!
//! assert_eq!(opts.priority, 10);
//! assert!(!opts.once);
//! assert_eq!(opts.throttle, Some(Duration::from_millis(250)));
//! assert_eq!(opts.debounce, None);
//! ```

use std::time::Duration;

/// Delivery options for one subscription.
///
/// The default is a plain subscription: priority 0, delivered synchronously
/// on every emit, never retired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsumerOptions {
    /// Delivery rank within one emit; higher runs earlier. Default 0.
    pub priority: i32,
    /// Retire the subscription after its first broadcast delivery.
    pub once: bool,
    /// Defer delivery until this window has been quiet; `None` = disabled.
    pub debounce: Option<Duration>,
    /// Minimum interval between admitted deliveries; `None` = disabled.
    pub throttle: Option<Duration>,
}

impl ConsumerOptions {
    /// Plain subscription options (same as `Default`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delivery priority. Higher priorities run earlier.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the subscription as one-shot.
    #[must_use]
    pub fn with_once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Enables debouncing with the given quiet window.
    #[must_use]
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = Some(window);
        self
    }

    /// Enables throttling with the given minimum interval.
    #[must_use]
    pub fn with_throttle(mut self, window: Duration) -> Self {
        self.throttle = Some(window);
        self
    }
}
