//! # Signal subscribers.
//!
//! This module provides the [`Subscribe`] trait — the contract every callback
//! implements — together with [`SubscribeFn`], a function-backed implementation
//! for the common "just give me a closure" case.
//!
//! ## Identity
//! Subscribers are handled through [`SubscribeRef`] (`Rc<dyn Subscribe<E>>`).
//! The `Rc` pointer *is* the subscriber's identity: `disconnect` and
//! `unsubscribe` match by pointer equality, and connecting the same
//! `SubscribeRef` twice updates the existing registration instead of adding a
//! duplicate. Keep a clone of the handle around if you intend to disconnect
//! later.
//!
//! ## Implementing custom subscribers
//! ```rust
//! use signalhub::{Subscribe, SubscriberError};
//!
//! struct Metrics;
//!
//! impl Subscribe<u64> for Metrics {
//!     fn on_signal(&self, value: &u64) -> Result<(), SubscriberError> {
//!         // increment counter by *value...
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "metrics"
//!     }
//! }
//! ```

mod subscribe;
mod subscribe_fn;

pub use subscribe::{Subscribe, SubscribeRef};
pub use subscribe_fn::SubscribeFn;
