//! Helpers behind [`function_name!`](crate::function_name).
//!
//! Rust has no built-in for the enclosing function's name, so the macro
//! declares a nested item and reads its type name, e.g.
//! `my_app::worker::run::{{closure}}::__here`. This module turns that into
//! the short member name written into log lines (`run`).

/// Suffix of the probe item the macro declares.
pub const PROBE_SUFFIX: &str = "::__here";

const CLOSURE_SEGMENT: &str = "::{{closure}}";

/// Reduce a probe type name to the enclosing function's own name.
///
/// Falls back to the full input when nothing is left after trimming, so the
/// result is never empty for a non-empty input.
pub fn short_function_name(probe_type_name: &str) -> &str {
    let path = probe_type_name
        .strip_suffix(PROBE_SUFFIX)
        .unwrap_or(probe_type_name);
    let path = path.trim_end_matches(CLOSURE_SEGMENT);

    match path.rsplit("::").next() {
        Some(name) if !name.is_empty() => name,
        _ => probe_type_name,
    }
}
