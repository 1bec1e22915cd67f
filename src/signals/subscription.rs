//! # Unsubscribe handle.
//!
//! [`Subscription`] is returned by [`SignalHub::subscribe`](crate::SignalHub::subscribe)
//! and undoes exactly that registration. It holds only a weak reference to the
//! signal's subscriber list, so a forgotten handle never keeps a removed
//! signal (or its callbacks) alive.
//!
//! ## Rules
//! - **Exactly once**: the first `unsubscribe()` call disconnects; every later
//!   call is a no-op - even if the same subscriber was re-connected in the
//!   meantime.
//! - **No RAII**: dropping the handle does *not* unsubscribe. A subscription
//!   outlives its handle unless `unsubscribe()` is called.
//! - **Signal already gone**: if the owning hub removed the signal,
//!   `unsubscribe()` is a no-op.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Weak;

use crate::signals::SignalInner;
use crate::subscribers::SubscribeRef;

/// Idempotent unsubscribe handle for one registration.
pub struct Subscription<E> {
    inner: Weak<RefCell<SignalInner<E>>>,
    subscriber: SubscribeRef<E>,
    done: Cell<bool>,
}

impl<E> Subscription<E> {
    pub(crate) fn new(inner: Weak<RefCell<SignalInner<E>>>, subscriber: SubscribeRef<E>) -> Self {
        Self {
            inner,
            subscriber,
            done: Cell::new(false),
        }
    }

    /// Disconnects the registered subscriber.
    ///
    /// ### Notes
    /// - Only the first call has an effect; repeated calls are no-ops.
    /// - Safe to call if the signal no longer exists.
    pub fn unsubscribe(&self) {
        if self.done.replace(true) {
            return;
        }
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().remove(&self.subscriber);
        }
    }

    /// Returns `true` once [`unsubscribe`](Subscription::unsubscribe) has run.
    pub fn is_unsubscribed(&self) -> bool {
        self.done.get()
    }
}

impl<E: 'static> fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("subscriber", &self.subscriber.name())
            .field("unsubscribed", &self.done.get())
            .finish()
    }
}
