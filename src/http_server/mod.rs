//! # tododb HTTP Server Module
//!
//! Thin axum adapter over the todo API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/todos` - Query todos (`owner`, `category`, `status`, `contains`, `limit`, `orderBy`)
//! - `/api/todos/:id` - Single todo
//! - `/observability/metrics` - Counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod todo_routes;

pub use config::HttpServerConfig;
pub use errors::{HttpError, HttpResult};
pub use server::HttpServer;
