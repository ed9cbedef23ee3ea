//! # Debounce slot: handle to one pending deferred delivery.
//!
//! A debounced subscription never runs inside the emit that produced the
//! value; the emitter spawns a deferred task and parks a [`DebounceSlot`] for
//! it in the pending-timer table. Each new debounce-eligible delivery replaces
//! the slot, cancelling the previous task, so only the newest scheduled
//! delivery within the window ever fires.
//!
//! ## Rules
//! - At most one live slot per subscription identity.
//! - Cancellation is cooperative via [`CancellationToken`]: the deferred task
//!   races the token against its sleep and exits silently when cancelled.
//! - The generation number identifies which scheduled delivery a slot belongs
//!   to; a fired task only removes the table entry if it is still the current
//!   generation (a replacement may already have taken the seat).

use tokio_util::sync::CancellationToken;

/// Cancellation handle for one scheduled deferred delivery.
#[derive(Clone, Debug)]
pub(crate) struct DebounceSlot {
    token: CancellationToken,
    generation: u64,
}

impl DebounceSlot {
    /// Creates a slot wrapping the deferred task's cancellation token.
    pub(crate) fn new(token: CancellationToken, generation: u64) -> Self {
        Self { token, generation }
    }

    /// Generation of the scheduled delivery this slot belongs to.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancels the pending delivery. The deferred task will never invoke the
    /// consumer. Cancelling a slot whose task already fired is a no-op.
    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }
}
