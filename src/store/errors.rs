//! Store error types
//!
//! Error codes:
//! - TODO_STORE_IO
//! - TODO_STORE_MALFORMED
//! - TODO_STORE_EMPTY_ID

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while building the record store.
///
/// Lookups never fail; a missing id is `None`, not an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Data file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON array of complete todos
    #[error("Malformed todo data: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// A record carries an empty `_id`
    #[error("Todo at index {0} has an empty _id")]
    EmptyId(usize),
}

impl StoreError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "TODO_STORE_IO",
            StoreError::MalformedJson(_) => "TODO_STORE_MALFORMED",
            StoreError::EmptyId(_) => "TODO_STORE_EMPTY_ID",
        }
    }
}
