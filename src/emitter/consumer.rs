//! # Consumer handle: a clonable, identity-bearing callback.
//!
//! [`Consumer`] wraps the callback a subscriber registers with the emitter.
//! Cloning the handle is cheap (internally an `Arc`) and clones share
//! **identity**: the consumer-addressed operations
//! ([`Emitter::emit_to_consumer`](crate::Emitter::emit_to_consumer),
//! [`Emitter::is_subscribed`](crate::Emitter::is_subscribed),
//! [`Emitter::unsubscribe_consumer`](crate::Emitter::unsubscribe_consumer))
//! match subscriptions by pointer identity of the underlying allocation, not
//! by comparing behavior.
//!
//! ## Rules
//! - `Consumer::new(f)` allocates a fresh identity; two calls with the same
//!   closure produce handles that never compare equal.
//! - `handle.clone()` shares the identity; keep a clone if you intend to
//!   address the subscription by consumer later.
//! - The same handle may back any number of subscriptions at once.
//!
//! ## Example
//! ```rust
//! use cadent::Consumer;
//!
//! let sink = Consumer::new(|value: u32| println!("got {value}"));
//! let alias = sink.clone();
//! let stranger = Consumer::new(|value: u32| println!("got {value}"));
//!
//! assert!(sink.ptr_eq(&alias));
//! assert!(!sink.ptr_eq(&stranger));
//! ```

use std::fmt;
use std::sync::Arc;

/// Callback registered to receive emitted values.
///
/// Holds `Arc<dyn Fn(T) + Send + Sync>`; the callback must be thread-safe
/// because debounced deliveries run on a spawned Tokio task.
pub struct Consumer<T>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Consumer<T> {
    /// Wraps a callback in a new handle with a fresh identity.
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// True if both handles share the same underlying allocation.
    ///
    /// This is the identity relation used by the consumer-addressed emitter
    /// operations. Clones of one handle are identical; separately constructed
    /// handles never are, even when built from the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Invokes the callback with one value.
    pub(crate) fn invoke(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Consumer<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("ptr", &Arc::as_ptr(&self.0))
            .finish()
    }
}
