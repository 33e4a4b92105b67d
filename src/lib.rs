//! tododb - A strict, deterministic, in-memory todo query service
//!
//! Loads a JSON array of todos once at startup and answers parameterized
//! queries (owner, category, status, substring, limit, order) against the
//! immutable snapshot.

pub mod api;
pub mod cli;
pub mod executor;
pub mod http_server;
pub mod observability;
pub mod store;
