//! # Emitter core: registry bookkeeping and dispatch.
//!
//! [`Emitter`] owns three tables keyed by [`SubscriptionId`]:
//!
//! - the **registry** (`BTreeMap`) — consumer + options per live
//!   subscription; ascending-id iteration is registration order, which is
//!   what makes the priority tie-break deterministic;
//! - the **throttle table** — one [`ThrottleGate`] per throttled
//!   subscription, created lazily on its first gated delivery;
//! - the **debounce table** — at most one [`DebounceSlot`] per subscription,
//!   replaced (and the old task cancelled) on each debounce-eligible
//!   delivery.
//!
//! ## Dispatch per emit
//! ```text
//! emit(value)
//!   ├─► snapshot registry, stable-sort by priority (desc, ties keep
//!   │   registration order)
//!   └─► for each subscription, in order:
//!         once?      ─► retire from registry BEFORE invoking
//!         throttle?  ─► gate.admit(now) or skip this subscriber entirely
//!         debounce?  ─► cancel pending slot, schedule deferred delivery
//!         otherwise  ─► invoke synchronously with a clone of the value
//! ```
//!
//! ## Rules
//! - The lock is held for bookkeeping only, never across a consumer
//!   invocation; consumers may re-enter any emitter operation.
//! - The snapshot governs one emit: a subscription removed re-entrantly
//!   mid-emit is still visited this emit, never the next.
//! - Consumer panics are not caught. A panic unwinds out of `emit` and later
//!   subscribers in that emit's order are not invoked; the emitter itself
//!   stays usable.
//! - Deferred deliveries hold no strong reference to the emitter: a pending
//!   debounce fires even if the emitter is dropped first.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, trace};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::emitter::{Consumer, ConsumerOptions, Publish, Subscription, SubscriptionId};
use crate::policies::{DebounceSlot, ThrottleGate};

/// One registered subscription: the consumer and its frozen options.
struct Entry<T> {
    consumer: Consumer<T>,
    options: ConsumerOptions,
}

/// Registry plus auxiliary timing tables. All mutation goes through the
/// emitter's lock; consumers never observe this struct directly.
struct Inner<T> {
    registry: BTreeMap<SubscriptionId, Entry<T>>,
    throttles: HashMap<SubscriptionId, ThrottleGate>,
    debounces: HashMap<SubscriptionId, DebounceSlot>,
    generation: u64,
}

impl<T> Inner<T> {
    fn new() -> Self {
        Self {
            registry: BTreeMap::new(),
            throttles: HashMap::new(),
            debounces: HashMap::new(),
            generation: 0,
        }
    }

    /// Removes a subscription and purges its auxiliary entries, cancelling
    /// any pending debounced delivery. Returns whether it was registered.
    fn remove(&mut self, id: SubscriptionId) -> bool {
        let removed = self.registry.remove(&id).is_some();
        self.throttles.remove(&id);
        if let Some(slot) = self.debounces.remove(&id) {
            slot.cancel();
        }
        removed
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

/// Consumer panics happen outside the lock, so a poisoned lock can only mean
/// a bug in our own bookkeeping; the tables are still consistent. Recover
/// instead of propagating.
fn lock_inner<T>(mutex: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Typed in-process event emitter.
///
/// Consumers register interest in values of type `T` and receive them
/// synchronously or via the timing modifiers in
/// [`ConsumerOptions`](crate::ConsumerOptions) (priority, once, debounce,
/// throttle).
///
/// ### Properties
/// - **Clonable handle**: clones share one registry (the emitter is a handle,
///   not the state).
/// - **Synchronous dispatch**: `emit` returns only after every immediate
///   (non-debounced) delivery has completed, in priority order.
/// - **Re-entrant**: consumers may subscribe, unsubscribe, and emit from
///   inside a delivery.
///
/// Debounced subscriptions defer onto Tokio timers: calling
/// [`emit`](Emitter::emit) with a debounced subscriber registered requires a
/// Tokio runtime context. The purely synchronous paths do not.
///
/// # Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use cadent::{Consumer, ConsumerOptions, Emitter};
///
/// let emitter = Emitter::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = {
///     let seen = Arc::clone(&seen);
///     Consumer::new(move |value: String| seen.lock().unwrap().push(value))
/// };
/// emitter.subscribe(sink.clone(), ConsumerOptions::default());
///
/// emitter.emit("ready".to_string());
/// assert_eq!(seen.lock().unwrap().as_slice(), &["ready"]);
/// assert!(emitter.is_subscribed(&sink));
/// ```
pub struct Emitter<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Emitter<T> {
    /// Creates an emitter with an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        lock_inner(&self.inner)
    }

    /// Registers a consumer with the given delivery options.
    ///
    /// Every call mints a fresh [`SubscriptionId`], so registering the same
    /// consumer handle twice yields two independently revocable
    /// subscriptions. The returned [`Subscription`] removes exactly this
    /// registration; calling `unsubscribe()` repeatedly is a no-op after the
    /// first, and dropping the handle does **not** unsubscribe.
    pub fn subscribe(&self, consumer: Consumer<T>, options: ConsumerOptions) -> Subscription
    where
        T: 'static,
    {
        let id = SubscriptionId::next();
        {
            let mut inner = self.lock();
            inner.registry.insert(id, Entry { consumer, options });
        }
        trace!(
            "subscribe {id} priority={} once={} debounce={:?} throttle={:?}",
            options.priority,
            options.once,
            options.debounce,
            options.throttle
        );

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(id, move || {
            if let Some(inner) = weak.upgrade() {
                if lock_inner(&inner).remove(id) {
                    trace!("unsubscribe {id}");
                }
            }
        })
    }

    /// True if at least one current subscription was registered with a clone
    /// of this consumer handle.
    #[must_use]
    pub fn is_subscribed(&self, consumer: &Consumer<T>) -> bool {
        self.lock()
            .registry
            .values()
            .any(|entry| entry.consumer.ptr_eq(consumer))
    }

    /// Removes at most one subscription registered with a clone of this
    /// consumer handle (the earliest-registered match), purging its timing
    /// state. No match is a silent no-op.
    pub fn unsubscribe_consumer(&self, consumer: &Consumer<T>) {
        let mut inner = self.lock();
        let found = inner
            .registry
            .iter()
            .find_map(|(id, entry)| entry.consumer.ptr_eq(consumer).then_some(*id));
        if let Some(id) = found {
            inner.remove(id);
            trace!("unsubscribe {id} (by consumer)");
        }
    }

    /// Removes every subscription, cancels every pending debounced delivery,
    /// and resets the timing tables. No consumer is invoked.
    pub fn clear(&self) {
        let mut inner = self.lock();
        let dropped = inner.registry.len();
        inner.registry.clear();
        inner.throttles.clear();
        for slot in inner.debounces.values() {
            slot.cancel();
        }
        inner.debounces.clear();
        debug!("cleared {dropped} subscriptions");
    }

    /// Current number of registered subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().registry.len()
    }

    /// True if no subscriptions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().registry.is_empty()
    }
}

impl<T: Clone + Send + 'static> Emitter<T> {
    /// Broadcasts one value to every eligible subscription.
    ///
    /// The registry is snapshotted up front and stable-sorted by descending
    /// priority (ties keep registration order); the snapshot governs this
    /// emit even if consumers mutate the registry re-entrantly. Per
    /// subscription, in order:
    ///
    /// 1. `once` retires the subscription **before** invocation, so
    ///    re-entrant emits and self-unsubscription can never double-deliver;
    /// 2. `throttle` skips the subscriber entirely (no invocation, no
    ///    debounce scheduling) while inside its window;
    /// 3. `debounce` cancels any pending deferred delivery and schedules a
    ///    new one carrying this value;
    /// 4. otherwise the consumer runs synchronously with a clone of the
    ///    value.
    ///
    /// A panicking consumer unwinds out of `emit`; subscribers later in the
    /// order are not invoked for this emit. Emitting with zero subscribers is
    /// a no-op.
    pub fn emit(&self, value: T) {
        let plan = {
            let inner = self.lock();
            let mut plan: Vec<(SubscriptionId, Consumer<T>, ConsumerOptions)> = inner
                .registry
                .iter()
                .map(|(id, entry)| (*id, entry.consumer.clone(), entry.options))
                .collect();
            // Stable sort over a registration-ordered snapshot: ties keep
            // registration order.
            plan.sort_by(|a, b| b.2.priority.cmp(&a.2.priority));
            plan
        };

        for (id, consumer, options) in plan {
            if options.once {
                self.lock().registry.remove(&id);
            }

            if let Some(window) = options.throttle {
                let now = Instant::now();
                let mut inner = self.lock();
                let admitted = inner
                    .throttles
                    .entry(id)
                    .or_insert_with(|| ThrottleGate::new(window))
                    .admit(now);
                if !admitted {
                    trace!("emit {id} suppressed by throttle");
                    continue;
                }
            }

            if let Some(window) = options.debounce {
                self.schedule_debounce(id, consumer, window, value.clone());
            } else {
                consumer.invoke(value.clone());
            }
        }
    }

    /// Delivers one value to every subscription registered with a clone of
    /// this consumer handle, synchronously and in registration order.
    ///
    /// This targeted path bypasses priority, throttle, and debounce
    /// entirely; a throttled subscription's window is not consulted and not
    /// advanced. A `once` match is removed (same removal path as
    /// [`unsubscribe_consumer`](Emitter::unsubscribe_consumer)) before it is
    /// invoked. No match is a silent no-op.
    pub fn emit_to_consumer(&self, consumer: &Consumer<T>, value: T) {
        let matched: Vec<(SubscriptionId, Consumer<T>, bool)> = {
            let inner = self.lock();
            inner
                .registry
                .iter()
                .filter(|(_, entry)| entry.consumer.ptr_eq(consumer))
                .map(|(id, entry)| (*id, entry.consumer.clone(), entry.options.once))
                .collect()
        };

        for (id, target, once) in matched {
            if once {
                self.lock().remove(id);
            }
            target.invoke(value.clone());
        }
    }

    /// Replaces the pending debounce slot for `id` (cancelling the previous
    /// deferred task) and spawns a new deferred delivery of `value`.
    ///
    /// The task holds only a `Weak` reference to the emitter state: it fires
    /// even if the emitter is dropped first, and on firing removes its own
    /// slot entry if it is still the current generation.
    fn schedule_debounce(&self, id: SubscriptionId, consumer: Consumer<T>, window: Duration, value: T) {
        let token = CancellationToken::new();
        let generation = {
            let mut inner = self.lock();
            let generation = inner.next_generation();
            if let Some(previous) = inner
                .debounces
                .insert(id, DebounceSlot::new(token.clone(), generation))
            {
                previous.cancel();
                trace!("emit {id} debounce rescheduled");
            }
            generation
        };

        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(window) => {
                    consumer.invoke(value);
                    if let Some(inner) = weak.upgrade() {
                        let mut inner = lock_inner(&inner);
                        let current = inner
                            .debounces
                            .get(&id)
                            .is_some_and(|slot| slot.generation() == generation);
                        if current {
                            inner.debounces.remove(&id);
                        }
                    }
                }
            }
        });
    }
}

impl<T: 'static> Publish<T> for Emitter<T> {
    fn subscribe(&self, consumer: Consumer<T>, options: ConsumerOptions) -> Subscription {
        Emitter::subscribe(self, consumer, options)
    }
}

impl<T> Clone for Emitter<T> {
    /// Clones share one registry; this is a handle, not a snapshot.
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter").field("len", &self.len()).finish()
    }
}
