// Append-only log file writer.
// Every call opens the file in append mode (creating it when absent), writes
// one line, flushes and closes it again. Nothing is buffered between calls.

use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::error::LoggerError;

#[derive(Debug, Default)]
pub struct FileSink {
    // Serializes appends from this process so lines never interleave
    write_lock: Mutex<()>,
}

impl FileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` to `path`, creating the file if needed.
    ///
    /// With `sync` set the data is pushed to disk with `sync_data` before
    /// returning; otherwise it is only handed to the OS.
    pub fn append(&self, path: &Path, line: &str, sync: bool) -> Result<(), LoggerError> {
        let _guard = self.write_lock.lock();
        append_line(path, line, sync).map_err(|source| LoggerError::File {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create `directory` (and parents) if it does not exist yet.
    pub fn ensure_directory(&self, directory: &Path) -> Result<(), LoggerError> {
        if directory.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(directory).map_err(|source| LoggerError::File {
            path: directory.to_path_buf(),
            source,
        })?;
        debug!("Created log directory {directory:?}");
        Ok(())
    }
}

fn append_line(path: &Path, line: &str, sync: bool) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.flush()?;
    if sync {
        file.sync_data()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("App.log");
        let sink = FileSink::new();

        sink.append(&path, "one\n", false).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\n");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("App.log");
        std::fs::write(&path, "existing\n").unwrap();
        let sink = FileSink::new();

        sink.append(&path, "one\n", false).unwrap();
        sink.append(&path, "two\n", true).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing\none\ntwo\n"
        );
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("App.log");
        let sink = FileSink::new();

        let err = sink.append(&path, "one\n", false).unwrap_err();
        match err {
            LoggerError::File { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ensure_directory_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a").join("b");
        let sink = FileSink::new();

        sink.ensure_directory(&dir).unwrap();
        sink.ensure_directory(&dir).unwrap();

        assert!(dir.is_dir());
    }
}
