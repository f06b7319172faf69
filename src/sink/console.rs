use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

use crate::error::LoggerError;

/// Console sink over any writer, stdout unless replaced.
///
/// The writer sits behind a mutex so each line is written in one piece even
/// when the logger is shared between threads.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write `line` as-is and flush.
    pub fn write_line(&self, line: &str) -> Result<(), LoggerError> {
        let mut writer = self.writer.lock();
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(LoggerError::Console)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
