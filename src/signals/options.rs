//! # Subscription-time configuration.
//!
//! [`SubscribeOptions`] carries the two knobs a subscriber can set when it
//! connects: `priority` (higher runs earlier) and `once` (auto-disconnect
//! after the first delivery). The defaults — priority `0`, `once` off — are
//! what `connect`/`subscribe` use when no options are given.

/// Configuration for a single subscription.
///
/// ### Fields
/// - **priority**: signed ordering key; larger values are invoked earlier.
///   Equal priorities keep their connection order.
/// - **once**: when set, the subscriber is disconnected automatically after
///   its first invocation (successful or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscribeOptions {
    /// Ordering key; higher runs earlier. Defaults to `0`.
    pub priority: i32,
    /// Auto-disconnect after the first delivery. Defaults to `false`.
    pub once: bool,
}

impl SubscribeOptions {
    /// Creates the default options (priority `0`, `once` off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority.
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the subscription as one-shot.
    #[inline]
    #[must_use]
    pub fn with_once(mut self) -> Self {
        self.once = true;
        self
    }
}
