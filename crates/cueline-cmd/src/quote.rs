//! Quoting rules for textual labels
//!
//! The console command line takes most free-text labels in double quotes,
//! but bare numbers, already-quoted strings, and `$variable` references must
//! pass through untouched.

/// Wrap a label in double quotes unless the grammar wants it bare
///
/// Bare: strings that parse as a number, strings already wrapped in `"…"`,
/// and variable references starting with `$`. Everything else is wrapped
/// exactly once.
pub fn quote_name(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value.to_string();
    }
    if value.starts_with('$') {
        return value.to_string();
    }
    if value.parse::<f64>().is_ok() {
        return value.to_string();
    }
    format!("\"{}\"", value)
}
