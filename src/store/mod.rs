//! Record store subsystem for tododb
//!
//! Holds the canonical, immutable collection of todos loaded at startup.
//!
//! # Lifecycle
//!
//! 1. Read the persisted JSON array
//! 2. Reject records with an empty `_id`
//! 3. Index ids, first occurrence wins
//! 4. Publish the store; it is read-only from here on

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::Todo;
pub use store::TodoStore;
