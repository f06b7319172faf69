use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};

use super::Severity;
use crate::config::DEFAULT_TIMESTAMP_FORMAT;

/// Where a log call was issued from.
///
/// Usually produced by [`call_site!`](crate::call_site) or one of the
/// `log_*!` macros; can also be built by hand when metadata comes from
/// elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// Rendered as `file\function:line`, the layout used inside log lines.
impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\\{}:{}", self.file, self.function, self.line)
    }
}

/// One log call, assembled after the threshold check and dropped once the
/// line has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub timestamp: String,
    pub severity: Severity,
    pub call_site: CallSite<'a>,
    pub message: String,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        timestamp: impl Into<String>,
        severity: Severity,
        call_site: CallSite<'a>,
        message: impl fmt::Display,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            severity,
            call_site,
            message: message.to_string(),
        }
    }

    /// Stamp a record with the current local time.
    pub fn now(
        timestamp_format: &str,
        severity: Severity,
        call_site: CallSite<'a>,
        message: impl fmt::Display,
    ) -> Self {
        let timestamp = render_timestamp(&Local::now(), timestamp_format);
        Self::new(timestamp, severity, call_site, message)
    }

    /// The full output line, newline included.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] | {} | {} -> {}",
            self.timestamp, self.severity, self.call_site, self.message
        )
    }
}

/// Render `at` with a strftime pattern.
///
/// Patterns chrono cannot render fall back to the default pattern rather
/// than failing, so a bad pattern can never lose a log line.
pub fn render_timestamp(at: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_err() {
        return at.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
    }
    out
}
