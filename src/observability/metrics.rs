//! Metrics registry for tododb
//!
//! Counters only, monotonic, reset on process start.
//! Relaxed atomics; exact per counter, not a consistent cut across counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the todo API
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Number of todos in the loaded store
    records_loaded: AtomicU64,
    /// Successful queries
    queries_executed: AtomicU64,
    /// Queries rejected with bad input
    queries_rejected: AtomicU64,
    /// Todos returned across all successful queries
    records_returned: AtomicU64,
    /// Lookups that found a todo
    lookups_served: AtomicU64,
    /// Lookups for an unknown id
    lookups_missed: AtomicU64,
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub records_loaded: u64,
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub records_returned: u64,
    pub lookups_served: u64,
    pub lookups_missed: u64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the size of the loaded store
    pub fn set_records_loaded(&self, count: u64) {
        self.records_loaded.store(count, Ordering::Relaxed);
    }

    /// Record a successful query returning `returned` todos
    pub fn record_query(&self, returned: u64) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.records_returned.fetch_add(returned, Ordering::Relaxed);
    }

    /// Record a rejected query
    pub fn record_rejection(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup; `found` is false for unknown ids
    pub fn record_lookup(&self, found: bool) {
        if found {
            self.lookups_served.fetch_add(1, Ordering::Relaxed);
        } else {
            self.lookups_missed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Read all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_loaded: self.records_loaded.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            records_returned: self.records_returned.load(Ordering::Relaxed),
            lookups_served: self.lookups_served.load(Ordering::Relaxed),
            lookups_missed: self.lookups_missed.load(Ordering::Relaxed),
        }
    }
}
