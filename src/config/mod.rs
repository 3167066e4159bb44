//! Configuration loaded from a TOML file (default `~/.resource-labels/config.toml`).
//!
//! The file is optional; if it does not exist every field falls back to its
//! `Default` value.
//!
//! ```toml
//! [storage]
//! data_dir = "/var/lib/resource-labels"
//!
//! [logging]
//! level = "debug"
//! json = true
//! rotation = "hourly"
//! ```

use crate::logging::{parse_rotation, LogConfig};
use crate::utils::{default_data_dir, DATA_FOLDER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, Level};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// `[storage]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding labels.json and resource-labels.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

/// `[logging]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    /// daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
    /// Defaults to `<data_dir>/logs`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            rotation: default_rotation(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabelsConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LabelsConfig {
    /// Logging setup derived from the `[logging]` and `[storage]` tables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if `level` is not a tracing level.
    pub fn log_config(&self) -> Result<LogConfig, ConfigError> {
        let log_level: Level = self
            .logging
            .level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.logging.level.clone()))?;
        let log_dir = self
            .logging
            .dir
            .clone()
            .unwrap_or_else(|| self.storage.data_dir().join("logs"));

        Ok(LogConfig {
            log_dir,
            log_level,
            json_format: self.logging.json,
            rotation: parse_rotation(&self.logging.rotation),
        })
    }
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(DATA_FOLDER).join("config.toml"))
}

/// Load configuration from `path`, or defaults if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<LabelsConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(LabelsConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: LabelsConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
