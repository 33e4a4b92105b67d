//! # HTTP Errors
//!
//! Maps query errors onto status codes and a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::executor::QueryError;

/// Result type for HTTP handlers
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors returned from HTTP handlers
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// Malformed query parameter
    #[error("{0}")]
    InvalidQueryParam(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),
}

impl HttpError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<QueryError> for HttpError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::BadInput(_) => HttpError::InvalidQueryParam(err.to_string()),
            QueryError::NotFound(_) => HttpError::NotFound(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<HttpError> for ErrorResponse {
    fn from(err: HttpError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
