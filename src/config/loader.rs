use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `server.base_url`.
pub const BASE_URL_ENV: &str = "REALWORLD_BASE_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/realworld-client/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("realworld-client").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// If the file doesn't exist, starts from `Config::default()`. Nothing is
    /// validated here; overrides are applied by the caller before
    /// [`validate`](Self::validate).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies the `REALWORLD_BASE_URL` override, if set.
    pub fn apply_env(&mut self) {
        self.apply_base_url(std::env::var(BASE_URL_ENV).ok());
    }

    /// Replace the base URL when an override is given and non-empty.
    pub fn apply_base_url(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.server.base_url = url.trim().to_string();
        }
    }

    /// Validates the configuration.
    ///
    /// The base URL must be absolute `http`/`https` with a host and no path,
    /// since request paths are appended to it verbatim.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.server.base_url;
        let url = reqwest::Url::parse(base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base_url '{}': {}", base_url, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("base_url '{}' must use http or https", base_url),
            });
        }

        if url.host_str().is_none() {
            return Err(ConfigError::ValidationError {
                message: format!("base_url '{}' has no host", base_url),
            });
        }

        if url.path() != "/" || url.query().is_some() {
            return Err(ConfigError::ValidationError {
                message: format!("base_url '{}' must not contain a path or query", base_url),
            });
        }

        Ok(())
    }
}
