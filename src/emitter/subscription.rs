//! # Subscription handle and identity.
//!
//! Every [`subscribe`](crate::Emitter::subscribe) call mints a fresh
//! [`SubscriptionId`] and returns a [`Subscription`] handle scoped to exactly
//! that registration. Registering the same consumer twice yields two
//! independently revocable subscriptions.
//!
//! ## Rules
//! - `unsubscribe()` is idempotent: the second and later calls are no-ops.
//! - `unsubscribe()` after the emitter itself has been dropped is a no-op.
//! - Dropping the handle does **not** unsubscribe; a registration stays live
//!   until it is explicitly revoked, retired by `once`, or cleared.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identity of one registration.
///
/// Minted from a process-wide monotonic counter; never reused, and unequal
/// across calls even for identical consumer+options pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Revocation handle for one registration.
///
/// Returned by [`Emitter::subscribe`](crate::Emitter::subscribe). Holds no
/// strong reference to the emitter, so an outstanding handle never keeps the
/// registry alive.
pub struct Subscription {
    id: Option<SubscriptionId>,
    revoke: Box<dyn Fn() + Send + Sync>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, revoke: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            id: Some(id),
            revoke: Box::new(revoke),
        }
    }

    /// A handle attached to nothing; `unsubscribe()` does nothing.
    ///
    /// Useful as a placeholder where a `Subscription` is required but no
    /// registration exists.
    pub fn detached() -> Self {
        Self {
            id: None,
            revoke: Box::new(|| {}),
        }
    }

    /// Identity of the registration, or `None` for a detached handle.
    #[must_use]
    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    /// Removes the registration this handle was minted for, cancelling any
    /// pending debounced delivery. Safe to call any number of times.
    pub fn unsubscribe(&self) {
        (self.revoke)()
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
