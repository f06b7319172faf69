use std::path::PathBuf;
use thiserror::Error;

/// Failure while writing a log line.
///
/// Filtering and formatting cannot fail; only the sinks can.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to write log line to console: {0}")]
    Console(#[source] std::io::Error),

    #[error("Failed to append log line to {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
