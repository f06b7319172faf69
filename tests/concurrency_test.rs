mod common;

use common::test_logger;
use leveled_log::{CallSite, Severity, WriteTarget};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const SITE: CallSite<'static> = CallSite::new("src/worker.rs", "run", 1);

#[test]
fn test_concurrent_appends_keep_lines_whole() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, console) = test_logger(temp_dir.path());
    logger.set_write_target(WriteTarget::Both);
    let logger = Arc::new(logger);

    let num_threads = 8;
    let lines_per_thread = 200;
    let payload = "x".repeat(512);

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let logger = logger.clone();
            let payload = payload.clone();
            thread::spawn(move || {
                for i in 0..lines_per_thread {
                    logger
                        .info(format_args!("{thread_id}-{i} {payload}"), SITE)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok());
    }

    let expected_suffix = format!(" {payload}");
    let written = std::fs::read_to_string(temp_dir.path().join("App.log")).unwrap();
    assert_eq!(written.lines().count(), num_threads * lines_per_thread);
    for line in written.lines() {
        assert!(line.starts_with("[TS] | INFO | src/worker.rs\\run:1 -> "));
        assert!(line.ends_with(&expected_suffix), "Interleaved line: {line}");
    }

    assert_eq!(console.lines().len(), num_threads * lines_per_thread);
}

#[test]
fn test_setters_race_with_emitters() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, console) = test_logger(temp_dir.path());
    let logger = Arc::new(logger);

    let writer = {
        let logger = logger.clone();
        thread::spawn(move || {
            for i in 0..500 {
                let level = Severity::ALL[i % Severity::ALL.len()];
                logger.set_min_level(level);
            }
            logger.set_min_level(Severity::Trace);
        })
    };

    let emitters: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for severity in Severity::ALL.iter().cycle().take(500) {
                    logger.emit(*severity, "race", SITE).unwrap();
                }
            })
        })
        .collect();

    assert!(writer.join().is_ok());
    for handle in emitters {
        assert!(handle.join().is_ok());
    }

    // Whatever passed the filter was written as complete lines
    for line in console.lines() {
        assert!(line.starts_with("[TS] | "));
        assert!(line.ends_with("-> race"));
    }
    assert_eq!(logger.min_level(), Severity::Trace);
}
