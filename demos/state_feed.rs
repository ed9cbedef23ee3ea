//! A state feed fanned out to subscribers with different delivery needs:
//! an audit log that sees everything first, a one-shot greeter, a debounced
//! "settled" view, and a throttled sampler.
//!
//! Run with: `cargo run --example state_feed`

use std::time::Duration;

use cadent::{Consumer, ConsumerOptions, Emitter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let emitter = Emitter::new();

    let audit = Consumer::new(|v: u32| println!("[audit]   state={v}"));
    emitter.subscribe(audit, ConsumerOptions::new().with_priority(10));

    let greeter = Consumer::new(|v: u32| println!("[first]   state={v} (one-shot)"));
    emitter.subscribe(greeter, ConsumerOptions::new().with_once());

    let settled = Consumer::new(|v: u32| println!("[settled] state={v} (after quiet window)"));
    emitter.subscribe(
        settled,
        ConsumerOptions::new().with_debounce(Duration::from_millis(100)),
    );

    let sampled = Consumer::new(|v: u32| println!("[sampled] state={v}"));
    emitter.subscribe(
        sampled,
        ConsumerOptions::new().with_throttle(Duration::from_millis(100)),
    );

    // A quick burst of state changes 30ms apart: the audit sees all of them,
    // the greeter only the first, the sampler roughly one per 100ms, and the
    // settled view fires once the burst goes quiet.
    for state in 1..=5 {
        emitter.emit(state);
        tokio::time::sleep(Duration::from_millis(30)).await;
    }

    tokio::time::sleep(Duration::from_millis(150)).await;
}
