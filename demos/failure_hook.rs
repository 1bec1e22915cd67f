//! # Example: failure_hook
//!
//! Observing swallowed subscriber failures.
//!
//! A failing (or panicking) subscriber never breaks delivery to the others
//! and never surfaces to the `emit` caller. This example installs a hub-wide
//! [`FailureHook`] to see every caught failure.
//!
//! ## Run
//! ```bash
//! cargo run --example failure_hook
//! ```

use std::rc::Rc;

use signalhub::{SignalHub, SubscribeFn, SubscriberError};

fn main() {
    let hub: SignalHub<u32> = SignalHub::new();

    // 1. Install a hub-wide failure hook (closures implement FailureHook)
    hub.set_failure_hook(Rc::new(|signal: &str, subscriber: &str, error: &SubscriberError| {
        eprintln!("[hook] signal={signal} subscriber={subscriber} err={:?}", error.as_message());
    }));

    // 2. A subscriber that fails on odd numbers
    hub.subscribe(
        "sensor.reading",
        SubscribeFn::rc("odd-hater", |n: &u32| {
            if n % 2 == 1 {
                return Err(SubscriberError::fail(format!("odd reading: {n}")));
            }
            println!("[odd-hater] accepted {n}");
            Ok(())
        }),
    );

    // 3. A well-behaved subscriber; runs even when odd-hater fails
    hub.subscribe(
        "sensor.reading",
        SubscribeFn::rc("recorder", |n: &u32| {
            println!("[recorder] {n}");
            Ok::<_, SubscriberError>(())
        }),
    );

    for reading in 0..4 {
        hub.emit("sensor.reading", &reading);
    }
}
