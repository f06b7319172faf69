//! Call-site capturing macros.
//!
//! `log_trace!` .. `log_error!` mirror the `tracing` macro shape but take the
//! logger as their first argument:
//!
//! ```no_run
//! use leveled_log::{Logger, log_info, log_warn};
//!
//! fn sync_inventory(logger: &Logger) -> Result<(), leveled_log::LoggerError> {
//!     log_info!(logger, "sync started")?;
//!     log_warn!(logger, "{} items skipped", 3)?;
//!     Ok(())
//! }
//! ```
//!
//! Each expands to the matching `Logger` method with `format_args!` and a
//! [`CallSite`](crate::CallSite) built from `file!()`, `line!()` and
//! [`function_name!`], and evaluates to its `Result`.

/// Name of the enclosing function, without module path or closure segments.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::domain::caller::short_function_name(__type_name_of(__here))
    }};
}

/// [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::file!(), $crate::function_name!(), ::std::line!())
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(::std::format_args!($($arg)+), $crate::call_site!())
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+), $crate::call_site!())
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+), $crate::call_site!())
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+), $crate::call_site!())
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+), $crate::call_site!())
    };
}
