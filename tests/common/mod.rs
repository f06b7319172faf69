// Shared helpers for integration tests
#![allow(dead_code)]

use leveled_log::{Logger, LoggerConfig};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

pub const RUN: &str = "2026-10-19_15-04-05";

/// In-memory stand-in for stdout.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger writing files under `dir` as `App*.log` and console output to the
/// returned buffer. Timestamps render as the literal `TS`.
pub fn test_logger(dir: &Path) -> (Logger, SharedBuffer) {
    test_logger_with_run(dir, RUN)
}

pub fn test_logger_with_run(dir: &Path, run: &str) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let config = LoggerConfig {
        base_file_name: "App".to_string(),
        directory: Some(dir.to_path_buf()),
        timestamp_format: "TS".to_string(),
        ..LoggerConfig::default()
    };
    let logger = Logger::builder()
        .config(config)
        .console(buffer.clone())
        .run_timestamp(run)
        .build();
    (logger, buffer)
}

/// Names of all entries in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
