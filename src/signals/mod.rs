//! # Signals: named channels and their dispatch engine.
//!
//! This module groups the per-channel state and the emit path:
//!
//! - [`Signal`] — one named channel owning an ordered subscriber list
//! - [`SubscribeOptions`] — subscription-time configuration (priority, once)
//! - [`SubscriberInfo`] — read-only registration snapshots for debugging
//! - [`Subscription`] — idempotent unsubscribe handle returned by the hub
//!
//! ## Quick reference
//! - **Ordering**: descending priority, insertion order within a priority.
//! - **Snapshot dispatch**: `emit` iterates a point-in-time copy of the list,
//!   so callbacks may mutate the signal mid-pass.
//! - **Isolation**: one failing callback never blocks the rest of the pass.

mod options;
mod signal;
mod subscription;

pub use options::SubscribeOptions;
pub use signal::{Signal, SubscriberInfo};
pub use subscription::Subscription;

pub(crate) use signal::SignalInner;
