//! Observability subsystem for tododb
//!
//! Provides:
//! - Structured logging (JSON, one event per line)
//! - Query and lookup counters
//!
//! Observability is read-only: nothing here influences query results.
//!
//! # Usage
//!
//! ```ignore
//! use tododb::observability::{Logger, MetricsRegistry};
//!
//! Logger::info("QUERY_COMPLETE", &[("returned", "12")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_query(12);
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
