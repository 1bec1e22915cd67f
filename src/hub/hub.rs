//! # Signal registry - named channels, created lazily.
//!
//! [`SignalHub`] maps channel names to [`Signal`] instances and is the usual
//! entrypoint for an application: subscribe and emit by name, without keeping
//! per-channel handles around.
//!
//! ## Architecture
//! ```text
//! subscribe("ui.click", cb) ──► signal("ui.click")  (created on first use)
//!                                    └─► Signal::connect(cb)
//!
//! emit("ui.click", &ev) ──► lookup only (missing name: no-op, nothing created)
//!                                    └─► Signal::emit(&ev)
//! ```
//!
//! ## Rules
//! - **At most one signal per name**; `signal()` returns a handle to the
//!   existing instance.
//! - **Lazy creation on subscription paths only**: `signal()` and
//!   `subscribe*()` create; `emit`/`unsubscribe`/`clear_signal`/
//!   `remove_signal` never do.
//! - **A removed name behaves like a never-seen name.**
//! - **No implicit global hub**: construct hubs explicitly and pass handles
//!   where needed; independent hubs never share state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::hooks::FailureHookRef;
use crate::hub::stats::HubStats;
use crate::signals::{Signal, SubscribeOptions, Subscription};
use crate::subscribers::SubscribeRef;

/// Shared mutable state behind a [`SignalHub`] handle.
struct HubInner<E> {
    signals: HashMap<String, Signal<E>>,
    hook: Option<FailureHookRef>,
}

/// A central registry of named signals.
///
/// Cloning a `SignalHub` produces another handle to the same registry
/// (internally `Rc`-shared), which lets callbacks capture a hub handle and
/// emit other signals from inside a delivery.
///
/// ### Responsibilities
/// - Creates signals lazily on first `signal()`/`subscribe()`
/// - Delegates subscribe/unsubscribe/emit to the underlying [`Signal`]
/// - Installs its failure hook on every signal it creates
///
/// ### Rules
/// - All operations are infallible; missing names are defined no-ops
/// - Single-threaded: no internal locking (synchronize externally if shared
///   across threads)
pub struct SignalHub<E> {
    inner: Rc<RefCell<HubInner<E>>>,
}

impl<E> Clone for SignalHub<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> Default for SignalHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> SignalHub<E> {
    /// Creates a new, empty hub.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                signals: HashMap::new(),
                hook: None,
            })),
        }
    }

    /// Returns the signal for `name`, creating it if it does not exist yet.
    ///
    /// Never fails. The returned handle stays valid even after
    /// [`remove_signal`](SignalHub::remove_signal); it just no longer receives
    /// hub emits for that name.
    pub fn signal(&self, name: &str) -> Signal<E> {
        let mut inner = self.inner.borrow_mut();
        if let Some(sig) = inner.signals.get(name) {
            return sig.clone();
        }

        let sig = Signal::new(name);
        if let Some(hook) = &inner.hook {
            sig.set_failure_hook(Rc::clone(hook));
        }
        tracing::debug!(signal = name, "signal created");
        inner.signals.insert(name.to_string(), sig.clone());
        sig
    }

    /// Returns `true` if a signal with this name exists.
    pub fn has_signal(&self, name: &str) -> bool {
        self.inner.borrow().signals.contains_key(name)
    }

    /// Returns handles to all current signals (unordered snapshot).
    pub fn signals(&self) -> Vec<Signal<E>> {
        self.inner.borrow().signals.values().cloned().collect()
    }

    /// Subscribes to a named signal with default options.
    ///
    /// Creates the signal on first use. Returns a [`Subscription`] that
    /// undoes exactly this registration; see
    /// [`subscribe_with`](SignalHub::subscribe_with).
    pub fn subscribe(&self, name: &str, subscriber: SubscribeRef<E>) -> Subscription<E> {
        self.subscribe_with(name, subscriber, SubscribeOptions::default())
    }

    /// Subscribes to a named signal with explicit [`SubscribeOptions`].
    ///
    /// ### Notes
    /// - Re-subscribing an already-registered subscriber updates its
    ///   priority/once in place (no duplicate delivery).
    /// - The returned handle is idempotent: only its first `unsubscribe()`
    ///   call disconnects.
    pub fn subscribe_with(
        &self,
        name: &str,
        subscriber: SubscribeRef<E>,
        opts: SubscribeOptions,
    ) -> Subscription<E> {
        let sig = self.signal(name);
        sig.connect_with(Rc::clone(&subscriber), opts);
        sig.subscription(subscriber)
    }

    /// Disconnects `subscriber` from the named signal.
    ///
    /// No-op if the signal does not exist or the subscriber is not
    /// registered (safe to call).
    pub fn unsubscribe(&self, name: &str, subscriber: &SubscribeRef<E>) {
        let sig = self.inner.borrow().signals.get(name).cloned();
        if let Some(sig) = sig {
            sig.disconnect(subscriber);
        }
    }

    /// Emits an event on the named signal.
    ///
    /// If the signal does not exist, this is a no-op - emitting never creates
    /// a signal. Delivery semantics (ordering, one-shot removal, failure
    /// isolation) are those of [`Signal::emit`].
    pub fn emit(&self, name: &str, event: &E) {
        // Registry borrow is released before dispatch so callbacks can
        // re-enter the hub.
        let sig = self.inner.borrow().signals.get(name).cloned();
        if let Some(sig) = sig {
            sig.emit(event);
        }
    }

    /// Removes all subscribers of the named signal; the signal itself stays.
    ///
    /// No-op if the signal does not exist.
    pub fn clear_signal(&self, name: &str) {
        let sig = self.inner.borrow().signals.get(name).cloned();
        if let Some(sig) = sig {
            sig.clear();
        }
    }

    /// Removes the named signal entirely (not just its subscribers).
    ///
    /// Afterwards the name behaves like one the hub has never seen: `emit`
    /// is a no-op and `subscribe` recreates a fresh signal. No-op if the
    /// signal does not exist.
    pub fn remove_signal(&self, name: &str) {
        if self.inner.borrow_mut().signals.remove(name).is_some() {
            tracing::debug!(signal = name, "signal removed");
        }
    }

    /// Removes every signal from the hub, resetting it to the empty state.
    pub fn clear_all(&self) {
        self.inner.borrow_mut().signals.clear();
        tracing::debug!("all signals removed");
    }

    /// Number of signals currently registered.
    pub fn len(&self) -> usize {
        self.inner.borrow().signals.len()
    }

    /// Returns `true` if the hub holds no signals.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().signals.is_empty()
    }

    /// Returns a diagnostic snapshot of the registry.
    pub fn stats(&self) -> HubStats {
        let inner = self.inner.borrow();
        HubStats {
            signal_count: inner.signals.len(),
            signals: inner
                .signals
                .iter()
                .map(|(name, sig)| (name.clone(), sig.len()))
                .collect(),
        }
    }

    /// Installs the failure hook on the hub and every existing signal.
    ///
    /// Signals created later inherit the hook. Replaces any previously
    /// installed hook.
    pub fn set_failure_hook(&self, hook: FailureHookRef) {
        let mut inner = self.inner.borrow_mut();
        for sig in inner.signals.values() {
            sig.set_failure_hook(Rc::clone(&hook));
        }
        inner.hook = Some(hook);
    }
}

impl<E: 'static> fmt::Debug for SignalHub<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalHub")
            .field("signals", &self.len())
            .finish()
    }
}
