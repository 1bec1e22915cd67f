//! # Failure observation hooks.
//!
//! Subscriber failures are swallowed by the dispatch loop so that one broken
//! callback cannot stop delivery to the rest. That robustness comes at the
//! cost of visibility, so every [`Signal`](crate::Signal) (and every
//! [`SignalHub`](crate::SignalHub), which installs its hook on the signals it
//! creates) accepts an optional [`FailureHook`] that observes each caught
//! failure.
//!
//! ## Rules
//! - The hook **observes only**: it runs after the failing callback returned
//!   and cannot change what the remaining subscribers receive.
//! - When no hook is installed, failures are logged through
//!   [`tracing::warn!`].
//! - A hook that panics is a bug in the embedding application; the dispatch
//!   loop does not guard against it.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use signalhub::{SignalHub, SubscriberError};
//!
//! let hub: SignalHub<u32> = SignalHub::new();
//! hub.set_failure_hook(Rc::new(|signal: &str, subscriber: &str, error: &SubscriberError| {
//!     eprintln!("{signal}/{subscriber}: {error}");
//! }));
//! ```

use std::rc::Rc;

use crate::error::SubscriberError;

/// Contract for observing subscriber failures.
///
/// Invoked synchronously from inside `emit`, once per caught failure, before
/// the next subscriber of the same pass runs.
pub trait FailureHook: 'static {
    /// Reports one caught failure.
    ///
    /// # Parameters
    /// - `signal`: name of the signal being emitted
    /// - `subscriber`: name of the failing subscriber
    /// - `error`: the caught failure
    fn on_failure(&self, signal: &str, subscriber: &str, error: &SubscriberError);
}

/// Shared hook handle.
pub type FailureHookRef = Rc<dyn FailureHook>;

impl<F> FailureHook for F
where
    F: Fn(&str, &str, &SubscriberError) + 'static,
{
    fn on_failure(&self, signal: &str, subscriber: &str, error: &SubscriberError) {
        self(signal, subscriber, error)
    }
}

/// Simple stdout failure hook.
///
/// Enabled via the `logging` feature. Prints one human-readable line per
/// caught failure, for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`FailureHook`] for
/// structured logging or metrics collection.
#[cfg(feature = "logging")]
pub struct LogFailures;

#[cfg(feature = "logging")]
impl FailureHook for LogFailures {
    fn on_failure(&self, signal: &str, subscriber: &str, error: &SubscriberError) {
        println!(
            "[{}] signal={signal} subscriber={subscriber} err={:?}",
            error.as_label(),
            error.as_message()
        );
    }
}
