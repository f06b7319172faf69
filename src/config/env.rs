use std::path::PathBuf;

use super::{ConfigError, LoggerConfig};
use crate::domain::{Severity, WriteTarget};

impl LoggerConfig {
    /// Defaults overridden by `LOG_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = LoggerConfig::default();

        if let Ok(level) = std::env::var("LOG_MIN_LEVEL") {
            config.min_level = level
                .parse::<Severity>()
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_MIN_LEVEL: {level}")))?;
        }

        // Unknown targets are kept and handled by the console fallback
        if let Ok(target) = std::env::var("LOG_WRITE_TARGET") {
            config.target = WriteTarget::from(target);
        }

        load_env_string("LOG_BASE_FILE_NAME", &mut config.base_file_name);
        load_env_var("LOG_SEPARATE_FILES", &mut config.separate_files_per_level)?;
        load_env_var("LOG_NEW_FILE_PER_RUN", &mut config.new_file_per_run)?;
        load_env_path_opt("LOG_DIRECTORY", &mut config.directory);
        load_env_string("LOG_TIMESTAMP_FORMAT", &mut config.timestamp_format);
        load_env_var("LOG_SYNC_WRITES", &mut config.sync_writes)?;

        config.validate()?;
        Ok(config)
    }
}

/// Parse an environment variable into `target`; keeps the default if unset.
fn load_env_var<T>(name: &str, target: &mut T) -> Result<(), ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(value) = std::env::var(name) {
        *target = value
            .parse()
            .map_err(|e| ConfigError::EnvError(format!("Invalid {name}: {e}")))?;
    }
    Ok(())
}

fn load_env_string(name: &str, target: &mut String) {
    if let Ok(value) = std::env::var(name) {
        *target = value;
    }
}

fn load_env_path_opt(name: &str, target: &mut Option<PathBuf>) {
    if let Ok(value) = std::env::var(name) {
        *target = Some(PathBuf::from(value));
    }
}
