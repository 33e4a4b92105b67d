//! Query engine subsystem for tododb
//!
//! Evaluates a query parameter set against a todo snapshot and produces a
//! deterministic result.
//!
//! # Execution Flow (strict order)
//!
//! 1. Owner filter (`owner`)
//! 2. Category filter (`category`)
//! 3. Status filter (`status`)
//! 4. Content filter (`contains`)
//! 5. Limit (`limit`)
//! 6. Order-by (`orderBy`)
//!
//! Each stage runs only if its key is present. Limit runs before order-by,
//! so `limit` + `orderBy` sorts the first N matches in load order.
//!
//! # Invariants
//!
//! - The snapshot is never mutated; every stage allocates its output
//! - Same snapshot + same params = same result
//! - Only a malformed `limit` can fail a query

mod errors;
mod executor;
mod filters;
mod params;
mod sorter;
mod stages;

pub use errors::{QueryError, QueryResult};
pub use executor::QueryEngine;
pub use filters::{status_from_param, TodoFilter};
pub use params::{QueryParams, CATEGORY, CONTAINS, LIMIT, ORDER_BY, OWNER, STATUS};
pub use sorter::{OrderField, ResultSorter};
pub use stages::{apply_limit, parse_limit, Stage, PIPELINE};
