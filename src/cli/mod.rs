//! CLI module for tododb
//!
//! Provides command-line interface for:
//! - serve: Load the store and serve HTTP
//! - query: One-shot query
//! - get: One-shot lookup by id

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{parse_param, Cli, Command};
pub use commands::{get, query, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
