//! Output sinks: the console and append-only log files.

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::FileSink;
