//! # cadent
//!
//! **cadent** is a typed in-process event emitter for Rust.
//!
//! It lets independent consumers register interest in values of a given type
//! and receive them synchronously or with timing modifiers: priority
//! ordering, one-shot delivery, debouncing, and throttling. It targets
//! single-process event wiring (UI state changes, internal notifications),
//! not cross-process or distributed messaging.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   subscribe(consumer, options) ──► registry { id ─► consumer + options }
//!                                        │
//!   emit(value) ───────────────────► snapshot, sort by priority (desc)
//!                                        │
//!                 ┌──────────────────────┼──────────────────────┐
//!                 ▼                      ▼                      ▼
//!           plain consumer        throttled consumer      debounced consumer
//!           invoke now            inside window? skip     cancel pending timer,
//!                                 else invoke/schedule    schedule new delivery
//!                                                              │
//!                                                         tokio timer fires
//!                                                         ──► invoke later
//! ```
//!
//! ### Dispatch rules
//! - One emit delivers to a **snapshot** of the registry, in descending
//!   priority order; equal priorities keep registration order.
//! - `once` subscriptions are retired **before** their single delivery, so
//!   re-entrant emits can never double-deliver them.
//! - Throttle gates before debounce when both are set: a throttled-out emit
//!   never reschedules the debounce window.
//! - All immediate deliveries complete before `emit` returns; only debounced
//!   deliveries run later, each as an independent Tokio task.
//! - Consumer panics are not caught; they unwind out of `emit` and later
//!   subscribers in that emit are not invoked.
//!
//! ## Features
//! | Area               | Description                                                      | Key types / traits                    |
//! |--------------------|------------------------------------------------------------------|---------------------------------------|
//! | **Subscriptions**  | Register/revoke consumers; duplicate registrations independent.  | [`Emitter`], [`Subscription`]         |
//! | **Delivery tuning**| Priority, one-shot, debounce, throttle per subscription.         | [`ConsumerOptions`]                   |
//! | **Targeted emit**  | Deliver to one consumer handle, bypassing timing policies.       | [`Emitter::emit_to_consumer`]         |
//! | **Seams**          | Subscribe-only surface for decoupled wiring.                     | [`Publish`], [`Consumer`]             |
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use cadent::{Consumer, ConsumerOptions, Emitter};
//!
//! let emitter = Emitter::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! // Audit first: priority 10 beats the default 0.
//! let audit = {
//!     let seen = Arc::clone(&seen);
//!     Consumer::new(move |v: u32| seen.lock().unwrap().push(format!("audit {v}")))
//! };
//! emitter.subscribe(audit, ConsumerOptions::new().with_priority(10));
//!
//! // One-shot: sees only the first emit.
//! let greeter = {
//!     let seen = Arc::clone(&seen);
//!     Consumer::new(move |v: u32| seen.lock().unwrap().push(format!("hello {v}")))
//! };
//! emitter.subscribe(greeter, ConsumerOptions::new().with_once());
//!
//! emitter.emit(1);
//! emitter.emit(2);
//!
//! assert_eq!(
//!     seen.lock().unwrap().as_slice(),
//!     &["audit 1", "hello 1", "audit 2"]
//! );
//! ```
//!
//! Debounced subscriptions defer onto Tokio timers, so emitting to them
//! requires a runtime context:
//!
//! ```no_run
//! use std::time::Duration;
//! use cadent::{Consumer, ConsumerOptions, Emitter};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let emitter = Emitter::new();
//!     let settled = Consumer::new(|v: String| println!("settled on {v}"));
//!     emitter.subscribe(
//!         settled,
//!         ConsumerOptions::new().with_debounce(Duration::from_millis(100)),
//!     );
//!
//!     emitter.emit("draft".to_string());
//!     emitter.emit("final".to_string()); // replaces the pending delivery
//!     tokio::time::sleep(Duration::from_millis(150)).await; // prints "settled on final"
//! }
//! ```

mod emitter;
mod policies;

// ---- Public re-exports ----

pub use emitter::{Consumer, ConsumerOptions, Emitter, Publish, Subscription, SubscriptionId};
