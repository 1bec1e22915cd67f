//! # Diagnostic counters for a hub.
//!
//! [`HubStats`] is a detached snapshot: reading it never blocks or mutates
//! the hub, and the numbers are only guaranteed to be consistent with each
//! other at the moment [`SignalHub::stats`](crate::SignalHub::stats) ran.

use std::collections::HashMap;

/// Point-in-time snapshot of a hub's registry.
///
/// Diagnostic use only - do not drive control flow off these numbers; the
/// map carries no ordering guarantee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubStats {
    /// Number of signals currently registered.
    pub signal_count: usize,
    /// Subscriber count per signal name.
    pub signals: HashMap<String, usize>,
}

impl HubStats {
    /// Total subscriber count across all signals.
    pub fn total_subscribers(&self) -> usize {
        self.signals.values().sum()
    }
}
