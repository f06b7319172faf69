use chrono::Local;
use std::sync::OnceLock;

/// Layout of the run timestamp embedded in per-run file names.
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

static RUN_TIMESTAMP: OnceLock<String> = OnceLock::new();

/// Timestamp of this process run, captured on first use and fixed after.
pub fn run_timestamp() -> &'static str {
    RUN_TIMESTAMP.get_or_init(|| Local::now().format(RUN_TIMESTAMP_FORMAT).to_string())
}
