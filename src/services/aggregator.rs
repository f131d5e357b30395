// src/services/aggregator.rs

//! Run-wide hit counts per escaped path.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Counts qualifying results per escaped path across all domains.
///
/// The same path on different domains shares one key. Entries are never
/// removed and counts only grow.
#[derive(Debug, Default)]
pub struct Aggregator {
    counts: Mutex<BTreeMap<String, usize>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one hit for `key`.
    pub fn record(&self, key: &str) {
        let mut counts = self.lock();
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Current count for `key`.
    pub fn count(&self, key: &str) -> usize {
        self.lock().get(key).copied().unwrap_or(0)
    }

    /// Copy of the current counts.
    pub fn snapshot(&self) -> BTreeMap<String, usize> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panicking holder cannot leave a half-applied increment behind,
    // so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, usize>> {
        self.counts.lock().unwrap_or_else(|e| e.into_inner())
    }
}
