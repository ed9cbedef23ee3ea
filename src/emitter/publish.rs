//! # Publish: the subscribe seam as a trait.
//!
//! [`Publish`] is the minimal surface a value source exposes to code that
//! only needs to register interest: one `subscribe` method. Call sites that
//! accept `&impl Publish<T>` (or `&dyn Publish<T>`) can be wired to an
//! [`Emitter`](crate::Emitter) today and to any other source later without
//! touching the subscriber side.

use crate::emitter::{Consumer, ConsumerOptions, Subscription};

/// Source of values of type `T` that consumers can subscribe to.
pub trait Publish<T> {
    /// Registers a consumer with the given delivery options.
    ///
    /// Returns a revocation handle scoped to exactly this registration.
    fn subscribe(&self, consumer: Consumer<T>, options: ConsumerOptions) -> Subscription;
}
