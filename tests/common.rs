use std::cell::RefCell;
use std::rc::Rc;

use signalhub::{SubscribeFn, SubscribeRef, SubscriberError};

/// Shared invocation log for test subscribers.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Rc<RefCell<Vec<String>>>,
}

#[allow(unused)]
impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    pub fn take(&self) -> Vec<String> {
        self.entries.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// Subscriber that records its tag on every delivery.
#[allow(unused)]
pub fn tagged<E: 'static>(log: &CallLog, tag: &'static str) -> SubscribeRef<E> {
    let log = log.clone();
    SubscribeFn::rc(tag, move |_: &E| {
        log.push(tag);
        Ok::<_, SubscriberError>(())
    })
}
