mod common;

use common::test_logger;
use leveled_log::{Severity, log_debug, log_error, log_info, log_trace, log_warn};
use tempfile::TempDir;

#[test]
fn test_macro_line_carries_call_site() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, console) = test_logger(temp_dir.path());

    let line = line!() + 1;
    log_info!(logger, "user {} logged in", 42).unwrap();

    assert_eq!(
        console.contents(),
        format!(
            "[TS] | INFO | {}\\test_macro_line_carries_call_site:{line} -> user 42 logged in\n",
            file!()
        )
    );
}

#[test]
fn test_each_level_macro() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, console) = test_logger(temp_dir.path());

    log_trace!(logger, "t").unwrap();
    log_debug!(logger, "d").unwrap();
    log_info!(logger, "i").unwrap();
    log_warn!(logger, "w").unwrap();
    log_error!(logger, "e").unwrap();

    let levels: Vec<String> = console
        .lines()
        .iter()
        .map(|line| line.split(" | ").nth(1).unwrap().to_string())
        .collect();
    assert_eq!(levels, vec!["TRACE", "DEBUG", "INFO", "WARN", "ERROR"]);
}

#[test]
fn test_macro_skips_formatting_when_filtered() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, console) = test_logger(temp_dir.path());
    logger.set_min_level(Severity::Warn);

    let mut evaluated = false;
    let mut expensive = || {
        evaluated = true;
        "payload"
    };
    log_debug!(logger, "{}", expensive()).unwrap();

    // Arguments are evaluated; only rendering is skipped
    assert!(evaluated);
    assert!(console.is_empty());
}

#[test]
fn test_macro_inside_closure_reports_enclosing_function() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, console) = test_logger(temp_dir.path());

    let log = || log_warn!(logger, "from closure");
    log().unwrap();

    assert!(
        console
            .contents()
            .contains("\\test_macro_inside_closure_reports_enclosing_function:")
    );
}

#[test]
fn test_macro_accepts_arc_logger() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, console) = test_logger(temp_dir.path());
    let shared = std::sync::Arc::new(logger);

    log_error!(shared, "shared").unwrap();

    assert!(console.contents().ends_with("-> shared\n"));
}
