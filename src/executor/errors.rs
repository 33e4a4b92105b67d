//! Query error types
//!
//! Error codes:
//! - TODO_BAD_INPUT
//! - TODO_NOT_FOUND

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors surfaced to the caller of the query API.
///
/// Transport concerns (status codes) are mapped by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `limit` value is not a non-negative base-10 integer
    #[error("Specified limit '{0}' can't be parsed to a non-negative integer")]
    BadInput(String),

    /// No todo carries the requested id
    #[error("No todo with id {0} was found")]
    NotFound(String),
}

impl QueryError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::BadInput(_) => "TODO_BAD_INPUT",
            QueryError::NotFound(_) => "TODO_NOT_FOUND",
        }
    }

    /// Returns the raw offending value (limit string or requested id)
    pub fn value(&self) -> &str {
        match self {
            QueryError::BadInput(raw) => raw,
            QueryError::NotFound(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(QueryError::BadInput("x".into()).code(), "TODO_BAD_INPUT");
        assert_eq!(QueryError::NotFound("x".into()).code(), "TODO_NOT_FOUND");
    }

    #[test]
    fn test_error_carries_raw_value() {
        let err = QueryError::BadInput("ASVAB".to_string());
        assert_eq!(err.value(), "ASVAB");
        assert!(err.to_string().contains("'ASVAB'"));

        let err = QueryError::NotFound("nonexistent".to_string());
        assert_eq!(err.value(), "nonexistent");
        assert_eq!(err.to_string(), "No todo with id nonexistent was found");
    }
}
