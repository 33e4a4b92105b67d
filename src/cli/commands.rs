//! CLI command implementations
//!
//! Every command loads the config, then the store, before doing anything
//! else. The store is published to the API only once fully loaded.

use std::path::Path;
use std::sync::Arc;

use crate::api::TodoApi;
use crate::executor::QueryParams;
use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::store::TodoStore;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::Query { config, params } => query(&config, params),
        Command::Get { config, id } => get(&config, &id),
    }
}

/// Load the config and the todo store it points at
fn boot(config_path: &Path) -> CliResult<(Config, TodoApi)> {
    let config = Config::load(config_path)?;
    let data_path = config.data_path();
    let path_str = data_path.display().to_string();

    let store = match TodoStore::load(&data_path) {
        Ok(store) => store,
        Err(e) => {
            Logger::error(
                "STORE_LOAD_FAILED",
                &[("code", e.code()), ("path", path_str.as_str())],
            );
            return Err(e.into());
        }
    };

    let records = store.size().to_string();
    Logger::info(
        "STORE_LOADED",
        &[("path", path_str.as_str()), ("records", records.as_str())],
    );

    Ok((config, TodoApi::new(Arc::new(store))))
}

/// Load todos and serve HTTP until the process is stopped
pub fn serve(config_path: &Path) -> CliResult<()> {
    let (config, api) = boot(config_path)?;
    let server = HttpServer::new(config.server, Arc::new(api));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::serve_failed(format!("HTTP server error: {}", e)))
}

/// Run one query and print the result envelope
pub fn query(config_path: &Path, params: Vec<(String, String)>) -> CliResult<()> {
    let (_, api) = boot(config_path)?;
    let params = QueryParams::from_pairs(params);

    match api.query(&params) {
        Ok(todos) => write_response(&todos),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Look up one todo and print the result envelope
pub fn get(config_path: &Path, id: &str) -> CliResult<()> {
    let (_, api) = boot(config_path)?;

    match api.lookup_by_id(id) {
        Ok(todo) => write_response(&todo),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}
