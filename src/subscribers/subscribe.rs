//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging callbacks into a
//! [`Signal`](crate::Signal). Each subscriber is invoked synchronously, on the
//! caller's thread, every time its signal is emitted.
//!
//! ## Contract
//! - `on_signal` runs inline inside `emit`; long-running work delays the
//!   remaining subscribers of the same pass.
//! - Returning `Err` (or panicking) does **not** stop the pass: the failure is
//!   reported to the [`FailureHook`](crate::FailureHook) and delivery continues
//!   with the next subscriber.
//! - A subscriber may freely call `connect`/`disconnect`/`emit` from inside
//!   `on_signal`, including on the signal currently being emitted.

use std::rc::Rc;

use crate::error::SubscriberError;

/// Contract for signal subscribers.
///
/// Implementations are shared through [`SubscribeRef`] and matched by pointer
/// identity; see the [module docs](crate::subscribers) for the identity rules.
pub trait Subscribe<E>: 'static {
    /// Handles a single emitted event.
    ///
    /// # Parameters
    /// - `event`: Reference to the emitted payload (does not transfer ownership)
    fn on_signal(&self, event: &E) -> Result<(), SubscriberError>;

    /// Human-readable name (for diagnostics and failure reports).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared subscriber handle.
///
/// Cheap to clone; the pointed-to allocation is the subscriber's identity for
/// `disconnect`/`unsubscribe` purposes.
pub type SubscribeRef<E> = Rc<dyn Subscribe<E>>;
