//! Domain layer for leveled-log.
//!
//! Contains the types every other module speaks in:
//! - `Severity`: ordered log level used for threshold filtering
//! - `WriteTarget`: which sink(s) a line goes to
//! - `CallSite` / `LogRecord`: caller metadata and the rendered line

pub mod caller;
pub mod record;
pub mod severity;
pub mod write_target;

pub use record::{CallSite, LogRecord};
pub use severity::Severity;
pub use write_target::WriteTarget;
