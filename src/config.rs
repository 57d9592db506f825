//! Client configuration: where the game backend lives.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Backend URL used when nothing else is configured.
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Environment variable consulted when no flag is given.
const SERVER_URL_ENV: &str = "CODEBREAKER_SERVER_URL";

/// Optional config file consulted after the environment.
const CONFIG_FILE: &str = "codebreaker.toml";

/// Configuration for the game client.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the game backend.
    #[serde(default = "default_server_url")]
    server_url: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl ClientConfig {
    /// Creates a configuration with an explicit backend URL.
    pub fn new(server_url: String) -> Self {
        Self { server_url }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(server_url = %config.server_url, "Config loaded");
        Ok(config)
    }

    /// Resolves the effective configuration: an explicit flag wins, then
    /// the `CODEBREAKER_SERVER_URL` environment variable, then
    /// `codebreaker.toml` in the working directory, then the default
    /// localhost URL.
    #[instrument]
    pub fn resolve(flag: Option<String>) -> Result<Self, ConfigError> {
        if let Some(url) = flag {
            debug!(server_url = %url, "Using server URL from flag");
            return Ok(Self::new(url));
        }
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            if !url.is_empty() {
                debug!(server_url = %url, "Using server URL from environment");
                return Ok(Self::new(url));
            }
        }
        if Path::new(CONFIG_FILE).exists() {
            return Self::from_file(CONFIG_FILE);
        }
        Ok(Self::new(default_server_url()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(default_server_url())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
