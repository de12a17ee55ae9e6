//! Configuration file

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::history::DEFAULT_CAPACITY;
use crate::http_server::HttpServerConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Mount point of the questionnaire routes (default "/m")
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    /// JSON-lines pick history; in-memory when absent
    #[serde(default)]
    pub history_path: Option<PathBuf>,

    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// JSON product list; empty catalog when absent
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_route_prefix() -> String {
    "/m".to_string()
}

fn default_history_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            route_prefix: default_route_prefix(),
            history_path: None,
            history_capacity: default_history_capacity(),
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Loads `path` when given, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.history_capacity == 0 {
            return Err(CliError::config_error("history_capacity must be > 0"));
        }

        if !self.route_prefix.starts_with('/') {
            return Err(CliError::config_error(format!(
                "Invalid route_prefix: '{}'. It must start with '/'.",
                self.route_prefix
            )));
        }

        Ok(())
    }
}
