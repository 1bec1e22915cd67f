//! # Signal - one named channel with an ordered subscriber list.
//!
//! [`Signal`] owns the subscriber registrations for a single channel and
//! implements the dispatch loop. It is usually reached through a
//! [`SignalHub`](crate::SignalHub), but standalone construction is supported.
//!
//! ## Architecture
//! ```text
//! emit(&event)
//!     │ snapshot of the ordered entry list (borrow released)
//!     ▼
//! for each entry (descending priority, stable):
//!     ├─ skip if disconnected since the snapshot
//!     ├─ invoke on_signal(&event)
//!     │      └─ Err / panic ──► FailureHook (pass continues)
//!     └─ once entry ──► disconnect before the next entry runs
//! ```
//!
//! ## Rules
//! - **Ordering**: entries are kept sorted by `(priority desc, connection order)`;
//!   every emit sees that order.
//! - **Snapshot dispatch**: subscribers connected during a pass are not
//!   delivered that pass; priority updates during a pass apply to future
//!   emits only.
//! - **No borrow across callbacks**: the subscriber list is never borrowed
//!   while a callback runs, so callbacks may connect, disconnect, and emit
//!   (even the same signal) freely.
//! - **Failure isolation**: a callback `Err` or panic is reported and
//!   swallowed; the remaining entries of the pass still run.

use std::cell::RefCell;
use std::cmp::Reverse;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::error::SubscriberError;
use crate::hooks::FailureHookRef;
use crate::signals::options::SubscribeOptions;
use crate::signals::subscription::Subscription;
use crate::subscribers::SubscribeRef;

/// One registered subscriber of a signal.
struct SubscriberEntry<E> {
    subscriber: SubscribeRef<E>,
    priority: i32,
    once: bool,
    /// Per-signal connection sequence; breaks priority ties (earlier first).
    seq: u64,
}

impl<E> Clone for SubscriberEntry<E> {
    fn clone(&self) -> Self {
        Self {
            subscriber: Rc::clone(&self.subscriber),
            priority: self.priority,
            once: self.once,
            seq: self.seq,
        }
    }
}

/// Shared mutable state behind a [`Signal`] handle.
pub(crate) struct SignalInner<E> {
    subscribers: Vec<SubscriberEntry<E>>,
    hook: Option<FailureHookRef>,
    next_seq: u64,
}

impl<E> SignalInner<E> {
    /// Removes the entry matching `target` by pointer identity.
    pub(crate) fn remove(&mut self, target: &SubscribeRef<E>) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|e| !Rc::ptr_eq(&e.subscriber, target));
        self.subscribers.len() != before
    }

    fn resort(&mut self) {
        self.subscribers.sort_by_key(|e| (Reverse(e.priority), e.seq));
    }
}

/// Read-only snapshot of one subscriber registration.
///
/// Returned by [`Signal::subscribers`] in effective delivery order. Holds no
/// reference into the signal's internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberInfo {
    /// Subscriber name (see [`Subscribe::name`](crate::Subscribe::name)).
    pub name: String,
    /// Ordering key; higher runs earlier.
    pub priority: i32,
    /// Whether the subscription is one-shot.
    pub once: bool,
}

/// A named event channel with prioritized subscribers.
///
/// Cloning a `Signal` produces another handle to the same channel (internally
/// `Rc`-shared), which is how callbacks can capture and re-enter the signal
/// they are subscribed to.
///
/// ### Responsibilities
/// - Owns the ordered subscriber list for one channel name
/// - Runs the snapshot dispatch loop (`emit`)
/// - Reports caught callback failures to the installed [`FailureHook`](crate::FailureHook)
///
/// ### Rules
/// - **Identity**: a given [`SubscribeRef`] is registered at most once;
///   re-connecting updates priority/once in place (last write wins)
/// - **Single-threaded**: no internal locking; embedders needing cross-thread
///   delivery must synchronize externally
pub struct Signal<E> {
    name: Rc<str>,
    inner: Rc<RefCell<SignalInner<E>>>,
}

impl<E> Clone for Signal<E> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> Signal<E> {
    /// Creates a new, empty signal with the given channel name.
    ///
    /// Names are opaque to the core; dotted hierarchies like
    /// `"ui.button.clicked"` are a caller convention, not parsed here.
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            inner: Rc::new(RefCell::new(SignalInner {
                subscribers: Vec::new(),
                hook: None,
                next_seq: 0,
            })),
        }
    }

    /// Returns the channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscribes with default options (priority `0`, not one-shot).
    ///
    /// See [`connect_with`](Signal::connect_with).
    pub fn connect(&self, subscriber: SubscribeRef<E>) {
        self.connect_with(subscriber, SubscribeOptions::default());
    }

    /// Subscribes with explicit [`SubscribeOptions`].
    ///
    /// If `subscriber` is already registered (pointer identity), its stored
    /// priority and once flag are updated in place; no duplicate entry is
    /// created and its position among equal priorities is unchanged.
    ///
    /// ### Notes
    /// - Takes effect immediately for the subscriber count, but never for an
    ///   emit pass already in progress (snapshot dispatch).
    pub fn connect_with(&self, subscriber: SubscribeRef<E>, opts: SubscribeOptions) {
        let mut inner = self.inner.borrow_mut();
        match inner
            .subscribers
            .iter()
            .position(|e| Rc::ptr_eq(&e.subscriber, &subscriber))
        {
            Some(idx) => {
                let entry = &mut inner.subscribers[idx];
                entry.priority = opts.priority;
                entry.once = opts.once;
            }
            None => {
                let seq = inner.next_seq;
                inner.next_seq += 1;
                inner.subscribers.push(SubscriberEntry {
                    subscriber,
                    priority: opts.priority,
                    once: opts.once,
                    seq,
                });
            }
        }
        inner.resort();
    }

    /// Removes `subscriber` (pointer identity). Returns `false` if absent.
    ///
    /// Safe to call from inside a callback during `emit`: the current pass
    /// skips the removed subscriber if it has not run yet and is otherwise
    /// unaffected.
    pub fn disconnect(&self, subscriber: &SubscribeRef<E>) -> bool {
        self.inner.borrow_mut().remove(subscriber)
    }

    /// Removes all subscribers. The signal keeps its name and stays usable.
    pub fn clear(&self) {
        self.inner.borrow_mut().subscribers.clear();
    }

    /// Current subscriber count.
    pub fn len(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Returns `true` if no subscriber is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().subscribers.is_empty()
    }

    /// Returns `(name, priority, once)` snapshots in delivery order.
    ///
    /// Diagnostic only; the returned data holds no reference into the signal.
    pub fn subscribers(&self) -> Vec<SubscriberInfo> {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .map(|e| SubscriberInfo {
                name: e.subscriber.name().to_string(),
                priority: e.priority,
                once: e.once,
            })
            .collect()
    }

    /// Installs the failure hook for this signal.
    ///
    /// Replaces any previously installed hook. Without a hook, caught
    /// failures are logged through [`tracing::warn!`].
    pub fn set_failure_hook(&self, hook: FailureHookRef) {
        self.inner.borrow_mut().hook = Some(hook);
    }

    /// Emits an event: invokes every current subscriber with `event`.
    ///
    /// The delivery order is a snapshot taken at the start of the call -
    /// descending priority, connection order within a priority. Subscribers
    /// connected during the pass are not delivered this event; subscribers
    /// disconnected during the pass are skipped if not yet visited.
    ///
    /// ### Failure isolation (deliberate trade-off)
    /// A callback `Err` or panic is caught, reported to the
    /// [`FailureHook`](crate::FailureHook), and **never propagated**: the
    /// remaining subscribers still run and `emit` returns normally. This
    /// favors robustness of the dispatch loop over visibility of bugs in
    /// individual subscribers - install a hook to observe failures.
    ///
    /// ### One-shot entries
    /// An entry registered with `once` is disconnected right after its
    /// invocation (successful or not), before the next entry of the pass runs.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<SubscriberEntry<E>> = {
            let inner = self.inner.borrow();
            if inner.subscribers.is_empty() {
                return;
            }
            inner.subscribers.clone()
        };

        for entry in snapshot {
            // Disconnected since the snapshot was taken?
            let gone = !self
                .inner
                .borrow()
                .subscribers
                .iter()
                .any(|e| Rc::ptr_eq(&e.subscriber, &entry.subscriber));
            if gone {
                continue;
            }

            // No borrow is held here: the callback may re-enter this signal.
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| entry.subscriber.on_signal(event)));
            let failure = match outcome {
                Ok(Ok(())) => None,
                Ok(Err(err)) => Some(err),
                Err(payload) => Some(SubscriberError::Panicked {
                    info: panic_message(payload.as_ref()),
                }),
            };
            if let Some(err) = failure {
                self.report_failure(entry.subscriber.name(), &err);
            }

            if entry.once {
                // Idempotent against a disconnect performed by the callback.
                self.disconnect(&entry.subscriber);
            }
        }
    }

    fn report_failure(&self, subscriber: &str, error: &SubscriberError) {
        let hook = self.inner.borrow().hook.clone();
        match hook {
            Some(hook) => hook.on_failure(&self.name, subscriber, error),
            None => tracing::warn!(
                signal = %self.name,
                subscriber,
                error = %error,
                "subscriber failed during emit"
            ),
        }
    }

    /// Builds the unsubscribe handle the hub returns from `subscribe`.
    pub(crate) fn subscription(&self, subscriber: SubscribeRef<E>) -> Subscription<E> {
        Subscription::new(Rc::downgrade(&self.inner), subscriber)
    }
}

impl<E: 'static> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Renders a caught panic payload as text.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::SubscribeFn;
    use std::cell::RefCell;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn tagged(log: &Log, tag: &'static str) -> SubscribeRef<u32> {
        let log = Rc::clone(log);
        SubscribeFn::rc(tag, move |_: &u32| {
            log.borrow_mut().push(tag);
            Ok::<_, SubscriberError>(())
        })
    }

    fn failing(tag: &'static str) -> SubscribeRef<u32> {
        SubscribeFn::rc(tag, move |_: &u32| -> Result<(), SubscriberError> {
            Err(SubscriberError::fail("boom"))
        })
    }

    #[test]
    fn test_emit_in_descending_priority_with_stable_ties() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");

        sig.connect_with(tagged(&log, "a"), SubscribeOptions::new().with_priority(5));
        sig.connect_with(tagged(&log, "b"), SubscribeOptions::new().with_priority(10));
        sig.connect_with(tagged(&log, "c"), SubscribeOptions::new().with_priority(5));

        sig.emit(&0);
        assert_eq!(*log.borrow(), ["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_connect_invokes_once() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");
        let a = tagged(&log, "a");

        sig.connect(Rc::clone(&a));
        sig.connect(Rc::clone(&a));

        assert_eq!(sig.len(), 1);
        sig.emit(&0);
        assert_eq!(*log.borrow(), ["a"]);
    }

    #[test]
    fn test_reconnect_updates_priority_in_place() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");
        let a = tagged(&log, "a");
        let b = tagged(&log, "b");

        sig.connect(Rc::clone(&a));
        sig.connect(Rc::clone(&b));
        sig.emit(&0);
        assert_eq!(*log.borrow(), ["a", "b"]);

        log.borrow_mut().clear();
        sig.connect_with(Rc::clone(&a), SubscribeOptions::new().with_priority(-1));
        assert_eq!(sig.len(), 2);
        sig.emit(&0);
        assert_eq!(*log.borrow(), ["b", "a"]);
    }

    #[test]
    fn test_once_is_removed_after_first_delivery() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");

        sig.connect_with(tagged(&log, "one"), SubscribeOptions::new().with_once());
        sig.connect(tagged(&log, "always"));

        sig.emit(&0);
        assert_eq!(sig.len(), 1);
        sig.emit(&0);
        assert_eq!(*log.borrow(), ["one", "always", "always"]);
    }

    #[test]
    fn test_once_is_removed_even_when_it_fails() {
        let sig: Signal<u32> = Signal::new("x");
        let failures: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let failures = Rc::clone(&failures);
            sig.set_failure_hook(Rc::new(
                move |_signal: &str, subscriber: &str, _error: &SubscriberError| {
                    failures.borrow_mut().push(subscriber.to_string());
                },
            ));
        }

        sig.connect_with(failing("bad-once"), SubscribeOptions::new().with_once());
        sig.emit(&0);

        assert!(sig.is_empty());
        assert_eq!(*failures.borrow(), ["bad-once"]);
    }

    #[test]
    fn test_failure_does_not_stop_the_pass() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            sig.set_failure_hook(Rc::new(
                move |signal: &str, subscriber: &str, error: &SubscriberError| {
                    seen.borrow_mut()
                        .push(format!("{signal}/{subscriber}/{}", error.as_label()));
                },
            ));
        }

        sig.connect_with(failing("bad"), SubscribeOptions::new().with_priority(10));
        sig.connect(tagged(&log, "good"));

        sig.emit(&0);
        assert_eq!(*log.borrow(), ["good"]);
        assert_eq!(*seen.borrow(), ["x/bad/subscriber_failed"]);
    }

    #[test]
    fn test_panicking_subscriber_is_isolated() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            sig.set_failure_hook(Rc::new(
                move |_signal: &str, _subscriber: &str, error: &SubscriberError| {
                    seen.borrow_mut().push(error.as_label().to_string());
                },
            ));
        }

        let panicker: SubscribeRef<u32> =
            SubscribeFn::rc("panicker", |_: &u32| -> Result<(), SubscriberError> {
                panic!("kaboom")
            });
        sig.connect_with(panicker, SubscribeOptions::new().with_priority(1));
        sig.connect(tagged(&log, "survivor"));

        sig.emit(&0);
        assert_eq!(*log.borrow(), ["survivor"]);
        assert_eq!(*seen.borrow(), ["subscriber_panicked"]);
    }

    #[test]
    fn test_disconnect_during_emit_skips_unvisited() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");

        let victim = tagged(&log, "victim");
        let killer: SubscribeRef<u32> = {
            let log = Rc::clone(&log);
            let sig = sig.clone();
            let victim = Rc::clone(&victim);
            SubscribeFn::rc("killer", move |_: &u32| {
                log.borrow_mut().push("killer");
                sig.disconnect(&victim);
                Ok::<_, SubscriberError>(())
            })
        };

        sig.connect_with(killer, SubscribeOptions::new().with_priority(10));
        sig.connect_with(tagged(&log, "bystander"), SubscribeOptions::new().with_priority(5));
        sig.connect(Rc::clone(&victim));

        sig.emit(&0);
        assert_eq!(*log.borrow(), ["killer", "bystander"]);
        assert_eq!(sig.len(), 2);
    }

    #[test]
    fn test_connect_during_emit_waits_for_next_pass() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");

        let late = tagged(&log, "late");
        let adder: SubscribeRef<u32> = {
            let log = Rc::clone(&log);
            let sig = sig.clone();
            let late = Rc::clone(&late);
            SubscribeFn::rc("adder", move |_: &u32| {
                log.borrow_mut().push("adder");
                sig.connect(Rc::clone(&late));
                Ok::<_, SubscriberError>(())
            })
        };

        sig.connect(adder);
        sig.emit(&0);
        assert_eq!(*log.borrow(), ["adder"]);
        assert_eq!(sig.len(), 2);

        log.borrow_mut().clear();
        sig.emit(&0);
        assert_eq!(*log.borrow(), ["adder", "late"]);
    }

    #[test]
    fn test_reconnect_mid_emit_affects_future_passes_only() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");

        let slow = tagged(&log, "slow");
        let promoter: SubscribeRef<u32> = {
            let log = Rc::clone(&log);
            let sig = sig.clone();
            let slow = Rc::clone(&slow);
            SubscribeFn::rc("promoter", move |_: &u32| {
                log.borrow_mut().push("promoter");
                sig.connect_with(Rc::clone(&slow), SubscribeOptions::new().with_priority(20));
                Ok::<_, SubscriberError>(())
            })
        };

        sig.connect(Rc::clone(&slow));
        sig.connect_with(promoter, SubscribeOptions::new().with_priority(10));

        sig.emit(&0);
        assert_eq!(*log.borrow(), ["promoter", "slow"]);

        log.borrow_mut().clear();
        sig.emit(&0);
        assert_eq!(*log.borrow(), ["slow", "promoter"]);
    }

    #[test]
    fn test_reentrant_emit_on_the_same_signal() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");

        let reemitter: SubscribeRef<u32> = {
            let log = Rc::clone(&log);
            let sig = sig.clone();
            SubscribeFn::rc("reemitter", move |depth: &u32| {
                log.borrow_mut().push("reemitter");
                if *depth == 0 {
                    sig.emit(&1);
                }
                Ok::<_, SubscriberError>(())
            })
        };

        sig.connect_with(reemitter, SubscribeOptions::new().with_priority(1));
        sig.connect(tagged(&log, "tail"));

        sig.emit(&0);
        // Inner pass runs to completion before the outer pass resumes.
        assert_eq!(*log.borrow(), ["reemitter", "reemitter", "tail", "tail"]);
    }

    #[test]
    fn test_emit_without_subscribers_is_a_noop() {
        let sig: Signal<u32> = Signal::new("x");
        sig.emit(&0);
        assert!(sig.is_empty());
    }

    #[test]
    fn test_disconnect_unknown_subscriber_is_a_noop() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");
        let stranger = tagged(&log, "stranger");

        assert!(!sig.disconnect(&stranger));
    }

    #[test]
    fn test_clear_keeps_the_name() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");
        sig.connect(tagged(&log, "a"));

        sig.clear();
        assert!(sig.is_empty());
        assert_eq!(sig.name(), "x");
    }

    #[test]
    fn test_subscriber_info_reflects_delivery_order() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sig: Signal<u32> = Signal::new("x");

        sig.connect(tagged(&log, "low"));
        sig.connect_with(
            tagged(&log, "high"),
            SubscribeOptions::new().with_priority(7).with_once(),
        );

        let info = sig.subscribers();
        assert_eq!(info.len(), 2);
        assert_eq!(info[0].name, "high");
        assert_eq!(info[0].priority, 7);
        assert!(info[0].once);
        assert_eq!(info[1].name, "low");
        assert_eq!(info[1].priority, 0);
        assert!(!info[1].once);
    }
}
