//! Per-subscription timing policies.
//!
//! This module groups the state that controls **when** a subscriber actually
//! sees an emitted value, once the registry has decided it is eligible.
//!
//! ## Contents
//! - [`ThrottleGate`] rate gate: rejects deliveries arriving before the
//!   configured window has elapsed since the last admitted one
//! - [`DebounceSlot`] handle to one pending deferred delivery; cancelling it
//!   guarantees the deferred call never runs
//!
//! ## Quick wiring
//! ```text
//! Emitter::emit
//!      └─► per subscription:
//!           - throttles[id].admit(now) to decide deliver/skip
//!           - debounces[id] replaced (old slot cancelled) on each
//!             debounce-eligible delivery; only the newest slot fires
//! ```
//!
//! The emitter owns at most one gate and one slot per subscription identity.
//! Neither type holds consumer logic; they carry timing metadata only.

mod debounce;
mod throttle;

pub(crate) use debounce::DebounceSlot;
pub(crate) use throttle::ThrottleGate;
