//! Error types used by the signal dispatch engine.
//!
//! This module defines a single error enum:
//!
//! - [`SubscriberError`] — errors raised by subscriber callbacks during `emit`.
//!
//! No signal or hub *operation* returns an error: emitting on an unknown name,
//! disconnecting an unknown subscriber, and re-connecting an already-subscribed
//! callback are all defined as no-ops (or updates), not failures. The only
//! failure source in this crate is a subscriber's own callback, and those
//! failures are caught by the dispatch loop and reported through the
//! [`FailureHook`](crate::FailureHook) rather than propagated.

use thiserror::Error;

/// # Errors produced by subscriber callbacks.
///
/// A subscriber either returns `Err(SubscriberError::Fail { .. })` itself, or
/// panics — in which case the dispatch loop catches the panic and reports it
/// as [`SubscriberError::Panicked`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SubscriberError {
    /// Callback reported a failure for this delivery.
    #[error("subscriber failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Callback panicked during this delivery (caught by the dispatch loop).
    #[error("subscriber panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl SubscriberError {
    /// Creates a [`SubscriberError::Fail`] from any message.
    ///
    /// # Example
    /// ```
    /// use signalhub::SubscriberError;
    ///
    /// let err = SubscriberError::fail("connection refused");
    /// assert_eq!(err.as_label(), "subscriber_failed");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        SubscriberError::Fail { error: error.into() }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriberError::Fail { .. } => "subscriber_failed",
            SubscriberError::Panicked { .. } => "subscriber_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SubscriberError::Fail { error } => format!("error: {error}"),
            SubscriberError::Panicked { info } => format!("panic: {info}"),
        }
    }
}

impl From<String> for SubscriberError {
    fn from(error: String) -> Self {
        SubscriberError::Fail { error }
    }
}

impl From<&str> for SubscriberError {
    fn from(error: &str) -> Self {
        SubscriberError::Fail { error: error.to_string() }
    }
}
