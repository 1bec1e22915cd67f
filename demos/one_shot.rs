//! # Example: one_shot
//!
//! Priorities and one-shot subscriptions on a single signal.
//!
//! Demonstrates how to:
//! - Order subscribers with [`SubscribeOptions::with_priority`] (higher runs earlier).
//! - Auto-disconnect a subscriber after its first delivery with `with_once`.
//! - Inspect registrations with [`Signal::subscribers`].
//!
//! ## Run
//! ```bash
//! cargo run --example one_shot
//! ```

use signalhub::{SignalHub, SubscribeFn, SubscribeOptions, SubscriberError};

fn main() {
    let hub: SignalHub<&str> = SignalHub::new();

    // Runs first on every emit.
    hub.subscribe_with(
        "game.fish.spawned",
        SubscribeFn::rc("tracker", |species: &&str| {
            println!("[tracker] spawned: {species}");
            Ok::<_, SubscriberError>(())
        }),
        SubscribeOptions::new().with_priority(10),
    );

    // Runs once, then disconnects itself.
    hub.subscribe_with(
        "game.fish.spawned",
        SubscribeFn::rc("first-spawn", |species: &&str| {
            println!("[first-spawn] the very first fish is a {species}!");
            Ok::<_, SubscriberError>(())
        }),
        SubscribeOptions::new().with_once(),
    );

    for info in hub.signal("game.fish.spawned").subscribers() {
        println!("registered: {} (priority={}, once={})", info.name, info.priority, info.once);
    }

    hub.emit("game.fish.spawned", &"goldfish");
    hub.emit("game.fish.spawned", &"carp");

    println!("subscribers left: {}", hub.signal("game.fish.spawned").len());
}
