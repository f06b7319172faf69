#![warn(rust_2018_idioms)]
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned
)]
#![allow(
    clippy::module_name_repetitions, // e.g. LoggerConfig in config module
    clippy::must_use_candidate       // Annotated selectively
)]

//! Minimal leveled logger.
//!
//! A [`Logger`] filters calls by a minimum [`Severity`], renders one line per
//! call with a timestamp and the caller's file, function and line, and writes
//! it to the console, to a `.log` file, or both.
//!
//! ```no_run
//! use leveled_log::{Logger, Severity, WriteTarget, log_debug, log_trace};
//!
//! let logger = Logger::new();
//! logger.set_min_level(Severity::Debug);
//! logger.set_write_target(WriteTarget::Both);
//! logger.set_base_file_name("App");
//!
//! log_trace!(logger, "filtered out")?;
//! log_debug!(logger, "written to stdout and App.log")?;
//! # Ok::<(), leveled_log::LoggerError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod logger;
mod macros;
pub mod sink;

pub use config::{ConfigError, LoggerConfig};
pub use domain::{CallSite, LogRecord, Severity, WriteTarget};
pub use error::LoggerError;
pub use logger::{Logger, LoggerBuilder};
