//! # Subscription registry and dispatch surface.
//!
//! Everything user-facing lives here:
//!
//! - [`Emitter`] — the registry plus the emit paths (broadcast and targeted)
//! - [`Consumer`] — clonable, identity-bearing callback handle
//! - [`ConsumerOptions`] — priority / once / debounce / throttle, frozen at
//!   registration
//! - [`Subscription`] and [`SubscriptionId`] — per-registration revocation
//! - [`Publish`] — the subscribe seam as a trait
//!
//! ## Identity model
//! Two identities coexist and serve different operations:
//! - every registration gets a unique [`SubscriptionId`]; the returned
//!   [`Subscription`] revokes exactly that registration, so duplicate
//!   consumer+options registrations stay independently removable;
//! - the consumer-addressed operations match by [`Consumer`] handle identity
//!   (pointer equality), and may therefore touch several registrations that
//!   share one handle.

mod consumer;
mod core;
mod options;
mod publish;
mod subscription;

pub use consumer::Consumer;
pub use core::Emitter;
pub use options::ConsumerOptions;
pub use publish::Publish;
pub use subscription::{Subscription, SubscriptionId};
