//! Failure statistics tracking.
//!
//! Thread-safe counters of per-IP lookup failures, grouped by category.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Thread-safe failure statistics tracker.
///
/// Every `FailureKind` is initialized to zero on creation, so counters can be
/// incremented through a shared reference from concurrent lookups.
pub struct FailureStats {
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl FailureStats {
    /// Creates a tracker with every category at zero.
    pub fn new() -> Self {
        let failures = FailureKind::iter()
            .map(|kind| (kind, AtomicUsize::new(0)))
            .collect();
        FailureStats { failures }
    }

    /// Increment the counter for a failure category.
    pub fn increment(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Get the count for a failure category.
    pub fn get(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total failure count across all categories.
    pub fn total(&self) -> usize {
        FailureKind::iter().map(|kind| self.get(kind)).sum()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FailureStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for kind in FailureKind::iter() {
            map.entry(&kind, &self.get(kind));
        }
        map.finish()
    }
}
