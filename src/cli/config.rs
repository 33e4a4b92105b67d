//! Configuration file
//!
//! ```json
//! { "data_file": "data/todos.json", "server": { "port": 4567 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Todo data file (required). Relative paths resolve against the
    /// directory holding the config file.
    pub data_file: String,

    /// HTTP server settings (optional)
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Directory of the loaded config file
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        Ok(())
    }

    /// Resolved path of the todo data file
    pub fn data_path(&self) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal() {
        let config = Config::parse(r#"{"data_file": "todos.json"}"#).unwrap();
        assert_eq!(config.data_file, "todos.json");
        assert_eq!(config.server, HttpServerConfig::default());
    }

    #[test]
    fn test_parse_with_server() {
        let config = Config::parse(
            r#"{"data_file": "todos.json", "server": {"host": "127.0.0.1", "port": 8081}}"#,
        )
        .unwrap();
        assert_eq!(config.server.socket_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn test_missing_data_file_rejected() {
        assert!(Config::parse(r#"{}"#).is_err());
        assert!(Config::parse(r#"{"data_file": "  "}"#).is_err());
    }

    #[test]
    fn test_empty_host_rejected() {
        let err = Config::parse(r#"{"data_file": "t.json", "server": {"host": ""}}"#).unwrap_err();
        assert!(err.message().contains("server.host"));
    }

    #[test]
    fn test_relative_data_path_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tododb.json");
        let mut file = fs::File::create(&config_path).unwrap();
        write!(file, r#"{{"data_file": "data/todos.json"}}"#).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.data_path(), dir.path().join("data/todos.json"));
    }

    #[test]
    fn test_absolute_data_path_kept() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("todos.json");
        let json = serde_json::json!({ "data_file": absolute.display().to_string() });

        let config = Config::parse(&json.to_string()).unwrap();
        assert_eq!(config.data_path(), absolute);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(&dir.path().join("absent.json")).is_err());
    }
}
