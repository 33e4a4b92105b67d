//! CLI argument definitions using clap
//!
//! Commands:
//! - tododb serve --config <path>
//! - tododb query --config <path> [--param key=value]...
//! - tododb get --config <path> <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tododb - A strict, deterministic, in-memory todo query service
#[derive(Parser, Debug)]
#[command(name = "tododb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load todos and start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./tododb.json")]
        config: PathBuf,
    },

    /// Run a single query and exit
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./tododb.json")]
        config: PathBuf,

        /// Query parameter as key=value; repeatable, first value per key wins
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Look up a single todo by id and exit
    Get {
        /// Path to configuration file
        #[arg(long, default_value = "./tododb.json")]
        config: PathBuf,

        /// Todo id
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Parses a `key=value` pair. The value may itself contain `=`.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}
