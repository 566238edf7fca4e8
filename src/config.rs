//! Configuration for sevlog

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::{validate_date_format, Logger, Severity, DEFAULT_DATE_FORMAT};

/// Logger settings, as stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log file path; a leading `~` is expanded to the home directory
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Least urgent severity that is still written ("off" disables logging)
    #[serde(default = "default_threshold")]
    pub threshold: Severity,

    /// chrono strftime pattern for line timestamps
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_log_path() -> String {
    logs_dir().join("sevlog.log").to_string_lossy().into_owned()
}

fn default_threshold() -> Severity {
    Severity::Info
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
            threshold: default_threshold(),
            date_format: default_date_format(),
        }
    }
}

impl LoggerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Load configuration from file, or return default if not found
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config file")?;
        validate_date_format(&config.date_format).context("Invalid date_format in config")?;
        Ok(config)
    }

    /// Log file path with `~` expanded
    pub fn resolved_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).into_owned())
    }
}

impl Logger {
    /// Build a logger from configuration
    ///
    /// The date format is checked before any directory or file is created.
    pub fn from_config(config: &LoggerConfig) -> crate::Result<Self> {
        validate_date_format(&config.date_format)?;
        Logger::new(config.resolved_path(), config.threshold)?
            .with_date_format(config.date_format.as_str())
    }
}

/// Get the base configuration directory (~/.sevlog)
/// Falls back to ./.sevlog if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".sevlog")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sevlog"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the default logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}
