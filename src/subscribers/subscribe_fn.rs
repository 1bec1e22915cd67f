//! # Function-backed subscriber (`SubscribeFn`)
//!
//! [`SubscribeFn`] wraps a closure `F: Fn(&E) -> Result<(), SubscriberError>`
//! together with a stable name, so plain functions can subscribe without a
//! dedicated type.
//!
//! ## Example
//! ```rust
//! use signalhub::{SubscribeFn, SubscribeRef, SubscriberError};
//!
//! let s: SubscribeRef<u32> = SubscribeFn::rc("doubler", |n: &u32| {
//!     println!("doubled: {}", n * 2);
//!     Ok::<_, SubscriberError>(())
//! });
//!
//! assert_eq!(s.name(), "doubler");
//! ```

use std::borrow::Cow;
use std::rc::Rc;

use crate::error::SubscriberError;
use crate::subscribers::Subscribe;

/// Function-backed subscriber implementation.
///
/// Wraps a closure that is invoked for every delivery.
#[derive(Debug)]
pub struct SubscribeFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscribeFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscribeFn::rc`] when you immediately need a [`SubscribeRef`](crate::SubscribeRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the subscriber and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use signalhub::{SubscribeFn, SubscribeRef, SubscriberError};
    ///
    /// let s: SubscribeRef<&str> = SubscribeFn::rc("echo", |msg: &&str| {
    ///     println!("{msg}");
    ///     Ok::<_, SubscriberError>(())
    /// });
    /// assert_eq!(s.name(), "echo");
    /// ```
    pub fn rc(name: impl Into<Cow<'static, str>>, f: F) -> Rc<Self> {
        Rc::new(Self::new(name, f))
    }
}

impl<E, F> Subscribe<E> for SubscribeFn<F>
where
    E: 'static,
    F: Fn(&E) -> Result<(), SubscriberError> + 'static, // Fn, not FnMut
{
    fn name(&self) -> &str {
        &self.name
    }

    fn on_signal(&self, event: &E) -> Result<(), SubscriberError> {
        (self.f)(event)
    }
}
