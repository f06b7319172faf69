use std::path::PathBuf;

use super::LoggerConfig;
use crate::domain::Severity;

pub const LOG_FILE_EXTENSION: &str = ".log";

impl LoggerConfig {
    /// File name for a line at `severity`.
    ///
    /// Suffix order is fixed: `<base>[_<LEVEL>][_<run_timestamp>].log`.
    pub fn file_name(&self, severity: Severity, run_timestamp: &str) -> String {
        let mut name = self.base_file_name.clone();
        if self.separate_files_per_level {
            name.push('_');
            name.push_str(severity.as_str());
        }
        if self.new_file_per_run {
            name.push('_');
            name.push_str(run_timestamp);
        }
        name.push_str(LOG_FILE_EXTENSION);
        name
    }

    /// [`file_name`](Self::file_name) joined onto the configured directory.
    pub fn file_path(&self, severity: Severity, run_timestamp: &str) -> PathBuf {
        let name = self.file_name(severity, run_timestamp);
        match &self.directory {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}
