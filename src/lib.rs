//! # signalhub
//!
//! **Signalhub** is a lightweight in-process publish/subscribe library for Rust.
//!
//! It provides named event channels ("signals") with prioritized, optionally
//! one-shot subscribers, and a central registry ("hub") that creates signals
//! lazily by name. The crate is designed as a building block for applications
//! that want decoupled, synchronous event dispatch without an async runtime.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     caller ──► SignalHub::emit("ui.button.clicked", &ev)
//!                     │
//!                     │ name lookup (missing name: no-op, nothing created)
//!                     ▼
//!            Signal("ui.button.clicked")
//!                     │
//!                     │ snapshot of the subscriber list
//!                     │ (descending priority, stable within a priority)
//!                     ├──► subscriber #1 (priority 10)
//!                     ├──► subscriber #2 (priority 0)  ── Err/panic ──► FailureHook
//!                     └──► subscriber #3 (priority 0, once) ──► auto-disconnect
//! ```
//!
//! ### Dispatch rules
//! - **Ordering**: higher priority runs earlier; equal priorities run in
//!   connection order.
//! - **Snapshot dispatch**: each `emit` iterates a point-in-time copy of the
//!   subscriber list. Subscribers added during the pass wait for the next
//!   emit; subscribers removed during the pass are skipped if not yet
//!   visited.
//! - **Reentrancy**: callbacks may connect, disconnect, and emit (including
//!   the signal currently dispatching) - no borrow of the subscriber list is
//!   held while a callback runs.
//! - **Failure isolation**: a callback `Err` or panic is caught and reported
//!   to the [`FailureHook`]; the remaining subscribers still run and `emit`
//!   returns normally.
//!
//! ## Features
//! | Area               | Description                                                          | Key types / traits                     |
//! |--------------------|----------------------------------------------------------------------|----------------------------------------|
//! | **Subscriber API** | Implement callbacks as types or plain closures.                      | [`Subscribe`], [`SubscribeFn`]         |
//! | **Signals**        | Per-channel subscriber lists with priority and one-shot handling.    | [`Signal`], [`SubscribeOptions`]       |
//! | **Hub**            | Name → signal registry with lazy creation and bulk clearing.         | [`SignalHub`], [`HubStats`]            |
//! | **Diagnostics**    | Observe swallowed callback failures; inspect registrations.          | [`FailureHook`], [`SubscriberInfo`]    |
//! | **Errors**         | Typed callback failures (returned errors and caught panics).         | [`SubscriberError`]                    |
//!
//! ## Error swallowing (deliberate)
//! `emit` never propagates a subscriber failure to its caller: one broken
//! callback must not prevent delivery to the rest. The cost is visibility -
//! a buggy subscriber fails silently unless you look. Install a
//! [`FailureHook`] (per signal or hub-wide) to observe every caught failure;
//! without one, failures are logged via [`tracing::warn!`].
//!
//! ## Concurrency model
//! Single-threaded and synchronous: every call runs to completion on the
//! caller's thread, and the crate performs no internal locking. Handles
//! ([`Signal`], [`SignalHub`]) are cheap `Rc`-backed clones and are not
//! `Send`. Embedders that need cross-thread delivery must add their own
//! synchronization on top.
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogFailures`] hook _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use signalhub::{SignalHub, SubscribeFn, SubscribeOptions, SubscriberError};
//!
//! #[derive(Debug)]
//! struct ButtonPress {
//!     button: u32,
//! }
//!
//! let hub: SignalHub<ButtonPress> = SignalHub::new();
//!
//! // Closure-backed subscriber; the handle undoes exactly this registration.
//! let sub = hub.subscribe(
//!     "ui.button.clicked",
//!     SubscribeFn::rc("click-log", |ev: &ButtonPress| {
//!         println!("clicked: {}", ev.button);
//!         Ok::<_, SubscriberError>(())
//!     }),
//! );
//!
//! // A one-shot subscriber that runs before "click-log".
//! hub.subscribe_with(
//!     "ui.button.clicked",
//!     SubscribeFn::rc("first-click", |_: &ButtonPress| {
//!         println!("first click!");
//!         Ok::<_, SubscriberError>(())
//!     }),
//!     SubscribeOptions::new().with_priority(10).with_once(),
//! );
//!
//! hub.emit("ui.button.clicked", &ButtonPress { button: 5 });
//! hub.emit("ui.button.clicked", &ButtonPress { button: 6 });
//!
//! sub.unsubscribe();
//! assert!(hub.signal("ui.button.clicked").is_empty());
//! ```

mod error;
mod hooks;
mod hub;
mod signals;
mod subscribers;

// ---- Public re-exports ----

pub use error::SubscriberError;
pub use hooks::{FailureHook, FailureHookRef};
pub use hub::{HubStats, SignalHub};
pub use signals::{Signal, SubscribeOptions, SubscriberInfo, Subscription};
pub use subscribers::{Subscribe, SubscribeFn, SubscribeRef};

// Optional: expose a simple built-in failure logger (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use hooks::LogFailures;
