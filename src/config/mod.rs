mod env;
pub mod file_name;
pub mod run_stamp;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{Severity, WriteTarget};

pub use file_name::LOG_FILE_EXTENSION;
pub use run_stamp::{RUN_TIMESTAMP_FORMAT, run_timestamp};

/// Emission timestamp pattern, `MM/dd/yyyy HH:mm:ss`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Used when the running executable's name cannot be determined.
pub const FALLBACK_BASE_FILE_NAME: &str = "app";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
    #[error("Invalid timestamp format '{0}'")]
    InvalidTimestampFormat(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Environment error: {0}")]
    EnvError(String),
}

/// Logger settings.
///
/// Every field can be changed at runtime through the matching
/// [`Logger`](crate::Logger) setter; a call always sees one consistent
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Calls below this severity are dropped
    pub min_level: Severity,
    pub target: WriteTarget,
    /// File name stem; level and run suffixes are appended to it
    pub base_file_name: String,
    /// One file per severity (`<base>_<LEVEL>.log`)
    pub separate_files_per_level: bool,
    /// Embed the run timestamp so each process run gets fresh files
    pub new_file_per_run: bool,
    /// Directory for log files; the working directory when unset
    pub directory: Option<PathBuf>,
    /// chrono strftime pattern for the emission timestamp
    pub timestamp_format: String,
    /// `sync_data` after every append
    pub sync_writes: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Severity::Trace,
            target: WriteTarget::Console,
            base_file_name: default_base_file_name(),
            separate_files_per_level: false,
            new_file_per_run: false,
            directory: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            sync_writes: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LoggerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_file_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Base file name cannot be empty".to_string(),
            ));
        }

        validate_timestamp_format(&self.timestamp_format)?;

        Ok(())
    }
}

/// Reject strftime patterns chrono cannot render.
pub fn validate_timestamp_format(pattern: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidTimestampFormat(pattern.to_string()));
    }
    Ok(())
}

/// File stem of the running executable, or [`FALLBACK_BASE_FILE_NAME`].
pub fn default_base_file_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_BASE_FILE_NAME.to_string())
}
