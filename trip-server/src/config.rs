//! Server configuration.
//!
//! Read once at startup from a JSON file:
//!
//! ```json
//! { "apikey": "...", "timezone": "Australia/Sydney", "listen": "0.0.0.0:3000" }
//! ```
//!
//! Only `apikey` is required. `TFNSW_API_KEY` in the environment takes
//! precedence over the file's key.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::tfnsw::{DEFAULT_BASE_URL, TfnswConfig};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "TRIP_CONFIG";

/// Config file used when `TRIP_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Environment variable that overrides the API key.
pub const API_KEY_ENV: &str = "TFNSW_API_KEY";

/// Errors loading the configuration. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("open config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("decode config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("apikey is required")]
    MissingApiKey,
}

/// Settings for the whole process.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Trip planner API key
    #[serde(rename = "apikey", default)]
    pub api_key: String,

    /// IANA zone used for query times and displayed times
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Address to serve on
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Trip planner base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_timezone() -> String {
    "Australia/Sydney".to_string()
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ServerConfig {
    /// Load from the file named by `TRIP_CONFIG` (or `config.json`),
    /// applying the `TFNSW_API_KEY` override.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let key_override = std::env::var(API_KEY_ENV).ok();

        Self::load(&path, key_override)
    }

    /// Load from `path`, replacing the key with `key_override` if it is
    /// non-empty.
    pub fn load(path: &Path, key_override: Option<String>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json(&json)?;
        if let Some(key) = key_override.filter(|k| !k.trim().is_empty()) {
            config.api_key = key;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse without validating.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that required settings are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }

    /// Client settings derived from this config.
    pub fn tfnsw(&self) -> TfnswConfig {
        TfnswConfig::new(self.api_key.trim()).with_base_url(&self.base_url)
    }
}
