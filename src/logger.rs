use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

use crate::config::{self, ConfigError, LoggerConfig};
use crate::domain::{CallSite, LogRecord, Severity, WriteTarget};
use crate::error::LoggerError;
use crate::sink::{ConsoleSink, FileSink};

/// Prefix for lines written under an unrecognized write target.
pub const UNDEFINED_WRITE_MODE_MARKER: &str = "Undefined write mode. ";

/// Leveled logger.
///
/// Owns its configuration and sinks; share it by reference or `Arc`. Every
/// call reads one snapshot of the configuration, so setters may run at any
/// time, including from other threads.
#[derive(Debug)]
pub struct Logger {
    config: RwLock<LoggerConfig>,
    run_timestamp: String,
    console: ConsoleSink,
    files: FileSink,
}

impl Logger {
    /// Default configuration, writing to stdout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn with_config(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub fn set_min_level(&self, level: Severity) {
        self.config.write().min_level = level;
    }

    pub fn min_level(&self) -> Severity {
        self.config.read().min_level
    }

    pub fn set_write_target(&self, target: impl Into<WriteTarget>) {
        self.config.write().target = target.into();
    }

    pub fn write_target(&self) -> WriteTarget {
        self.config.read().target.clone()
    }

    pub fn set_base_file_name(&self, name: impl Into<String>) {
        self.config.write().base_file_name = name.into();
    }

    pub fn base_file_name(&self) -> String {
        self.config.read().base_file_name.clone()
    }

    pub fn set_separate_files_per_level(&self, separate: bool) {
        self.config.write().separate_files_per_level = separate;
    }

    pub fn separate_files_per_level(&self) -> bool {
        self.config.read().separate_files_per_level
    }

    pub fn set_new_file_per_run(&self, new_file: bool) {
        self.config.write().new_file_per_run = new_file;
    }

    pub fn new_file_per_run(&self) -> bool {
        self.config.read().new_file_per_run
    }

    pub fn set_directory(&self, directory: Option<PathBuf>) {
        self.config.write().directory = directory;
    }

    pub fn directory(&self) -> Option<PathBuf> {
        self.config.read().directory.clone()
    }

    /// Change the emission timestamp pattern.
    ///
    /// A pattern chrono cannot render is rejected and the current one kept.
    pub fn set_timestamp_format(&self, pattern: impl Into<String>) -> Result<(), ConfigError> {
        let pattern = pattern.into();
        config::validate_timestamp_format(&pattern)?;
        self.config.write().timestamp_format = pattern;
        Ok(())
    }

    pub fn timestamp_format(&self) -> String {
        self.config.read().timestamp_format.clone()
    }

    pub fn set_sync_writes(&self, sync: bool) {
        self.config.write().sync_writes = sync;
    }

    pub fn sync_writes(&self) -> bool {
        self.config.read().sync_writes
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    pub fn replace_config(&self, config: LoggerConfig) {
        *self.config.write() = config;
    }

    pub fn run_timestamp(&self) -> &str {
        &self.run_timestamp
    }

    /// Whether a call at `severity` would produce output.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.config.read().min_level
    }

    /// Log file a call at `severity` would append to under the current
    /// configuration.
    pub fn file_path_for(&self, severity: Severity) -> PathBuf {
        self.config.read().file_path(severity, &self.run_timestamp)
    }

    /// Filter, format and dispatch one log call.
    ///
    /// Calls below the minimum level return immediately without rendering
    /// `message`. Sink failures are returned, never swallowed.
    pub fn emit(
        &self,
        severity: Severity,
        message: impl fmt::Display,
        call_site: CallSite<'_>,
    ) -> Result<(), LoggerError> {
        let plan = {
            let config = self.config.read();
            if severity < config.min_level {
                return Ok(());
            }
            EmitPlan::capture(&config, severity, &self.run_timestamp)
        };

        let line = LogRecord::now(&plan.timestamp_format, severity, call_site, message).to_line();

        if let Some(raw) = plan.unrecognized {
            warn!("Undefined write mode {raw:?}, writing log line to console");
            return self
                .console
                .write_line(&format!("{UNDEFINED_WRITE_MODE_MARKER}{line}"));
        }
        if plan.console {
            self.console.write_line(&line)?;
        }
        if let Some(file) = plan.file {
            if let Some(directory) = &file.directory {
                self.files.ensure_directory(directory)?;
            }
            self.files.append(&file.path, &line, file.sync_writes)?;
        }
        Ok(())
    }

    pub fn trace(
        &self,
        message: impl fmt::Display,
        call_site: CallSite<'_>,
    ) -> Result<(), LoggerError> {
        self.emit(Severity::Trace, message, call_site)
    }

    pub fn debug(
        &self,
        message: impl fmt::Display,
        call_site: CallSite<'_>,
    ) -> Result<(), LoggerError> {
        self.emit(Severity::Debug, message, call_site)
    }

    pub fn info(
        &self,
        message: impl fmt::Display,
        call_site: CallSite<'_>,
    ) -> Result<(), LoggerError> {
        self.emit(Severity::Info, message, call_site)
    }

    pub fn warn(
        &self,
        message: impl fmt::Display,
        call_site: CallSite<'_>,
    ) -> Result<(), LoggerError> {
        self.emit(Severity::Warn, message, call_site)
    }

    pub fn error(
        &self,
        message: impl fmt::Display,
        call_site: CallSite<'_>,
    ) -> Result<(), LoggerError> {
        self.emit(Severity::Error, message, call_site)
    }
}

/// The parts of the configuration one emission needs, copied out under the
/// read lock.
struct EmitPlan {
    timestamp_format: String,
    console: bool,
    file: Option<FileDestination>,
    unrecognized: Option<String>,
}

struct FileDestination {
    directory: Option<PathBuf>,
    path: PathBuf,
    sync_writes: bool,
}

impl EmitPlan {
    fn capture(config: &LoggerConfig, severity: Severity, run_timestamp: &str) -> Self {
        let target = &config.target;
        let file = target.writes_file().then(|| FileDestination {
            directory: config.directory.clone(),
            path: config.file_path(severity, run_timestamp),
            sync_writes: config.sync_writes,
        });
        Self {
            timestamp_format: config.timestamp_format.clone(),
            console: target.writes_console(),
            file,
            unrecognized: (!target.is_recognized()).then(|| target.to_string()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`Logger`] with a non-default configuration, console
/// writer or run timestamp.
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    config: Option<LoggerConfig>,
    console: Option<ConsoleSink>,
    run_timestamp: Option<String>,
}

impl LoggerBuilder {
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Send console output to `writer` instead of stdout.
    pub fn console<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console = Some(ConsoleSink::new(writer));
        self
    }

    /// Use `stamp` instead of the process run timestamp in per-run file
    /// names.
    pub fn run_timestamp(mut self, stamp: impl Into<String>) -> Self {
        self.run_timestamp = Some(stamp.into());
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            config: RwLock::new(self.config.unwrap_or_default()),
            run_timestamp: self
                .run_timestamp
                .unwrap_or_else(|| config::run_timestamp().to_string()),
            console: self.console.unwrap_or_default(),
            files: FileSink::new(),
        }
    }
}
