//! # Example: basic
//!
//! Minimal example of subscribing to a named signal and emitting events.
//!
//! Demonstrates how to:
//! - Create a [`SignalHub`] and subscribe with [`SubscribeFn`].
//! - Emit a payload to every subscriber by name.
//! - Unsubscribe through the returned [`Subscription`] handle.
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use signalhub::{SignalHub, SubscribeFn, SubscriberError};

#[derive(Debug)]
struct ButtonPress {
    button: u32,
}

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    // 1. Create a hub; signals are created lazily by name
    let hub: SignalHub<ButtonPress> = SignalHub::new();

    // 2. Subscribe a closure-backed callback
    let sub = hub.subscribe(
        "ui.button.clicked",
        SubscribeFn::rc("click-log", |ev: &ButtonPress| {
            println!("[click-log] button={}", ev.button);
            Ok::<_, SubscriberError>(())
        }),
    );

    // 3. Emit a couple of events
    hub.emit("ui.button.clicked", &ButtonPress { button: 5 });
    hub.emit("ui.button.clicked", &ButtonPress { button: 6 });

    // 4. Unsubscribe; further emits reach nobody
    sub.unsubscribe();
    hub.emit("ui.button.clicked", &ButtonPress { button: 7 });

    println!("{:?}", hub.stats());
}
