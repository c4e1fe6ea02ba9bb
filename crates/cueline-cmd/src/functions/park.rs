//! Park and unpark function keywords
//!
//! Park locks the DMX output of attributes; unpark releases the lock. The
//! target is any object fragment produced by the object encoders, so
//! `park(Some(&fixture(5)?), None)` composes naturally.

use crate::ident::fmt_decimal;

/// Lock DMX output values, optionally at an explicit level
///
/// Without a target the current selection is parked; without a value the
/// attributes park at their current output.
///
/// ```
/// use cueline_cmd::functions::park;
///
/// assert_eq!(park(Some("fixture 5"), None), "park fixture 5");
/// assert_eq!(park(Some("channel 1 thru 5"), Some(100.0)), "park channel 1 thru 5 at 100");
/// assert_eq!(park(None, None), "park");
/// ```
pub fn park(target: Option<&str>, at: Option<f64>) -> String {
    let mut cmd = "park".to_string();
    if let Some(target) = target {
        cmd = format!("{} {}", cmd, target);
    }
    if let Some(at) = at {
        cmd = format!("{} at {}", cmd, fmt_decimal(at));
    }
    cmd
}

/// Release previously parked DMX channels
pub fn unpark(target: Option<&str>) -> String {
    match target {
        Some(target) => format!("unpark {}", target),
        None => "unpark".to_string(),
    }
}
