//! Plus, minus, page and condition helping keywords
//!
//! Plus and minus do double duty: as a starting keyword they grow or shrink
//! the current selection, after at they mark a value as relative. Note that
//! the sign-joined selection forms repeat the sign before every element
//! (`- 1 - 3 - 5`) instead of using the regular list syntax.

use crate::error::{CommandError, Result};
use crate::ident::{fmt_decimal, Selection};

fn signed_selection(sign: char, sel: Selection) -> Result<String> {
    match sel {
        Selection::List(ids) if ids.is_empty() => {
            Err(CommandError::MissingArgument("selection must not be empty"))
        }
        Selection::List(ids) => {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(&format!(" {} ", sign));
            Ok(format!("{} {}", sign, joined))
        }
        other => Ok(format!("{} {}", sign, other.render()?)),
    }
}

/// Grow the current selection: `+ 5`, `+ 5 thru 7`, `+ 1 + 3 + 5`
pub fn add_to_selection(sel: impl Into<Selection>) -> Result<String> {
    signed_selection('+', sel.into())
}

/// Shrink the current selection: `- 5`, `- 5 thru 7`, `- 1 - 3 - 5`
pub fn remove_from_selection(sel: impl Into<Selection>) -> Result<String> {
    signed_selection('-', sel.into())
}

/// Apply a relative value change to the current selection
///
/// The sign becomes the operator and the magnitude is printed unsigned, so
/// `at - 10` subtracts while a literal `-10` would be an absolute value.
///
/// ```
/// use cueline_cmd::functions::at_relative;
///
/// assert_eq!(at_relative(5.0).unwrap(), "at + 5");
/// assert_eq!(at_relative(-10.0).unwrap(), "at - 10");
/// assert!(at_relative(0.0).is_err());
/// ```
pub fn at_relative(value: f64) -> Result<String> {
    if value == 0.0 {
        return Err(CommandError::InvalidCombination(
            "relative value cannot be zero",
        ));
    }
    let sign = if value > 0.0 { '+' } else { '-' };
    Ok(format!("at {} {}", sign, fmt_decimal(value.abs())))
}

/// Flip to the next executor page; `page +` advances one page
pub fn page_next(steps: Option<u32>) -> String {
    match steps {
        Some(steps) => format!("page + {}", steps),
        None => "page +".to_string(),
    }
}

/// Flip to the previous executor page
pub fn page_previous(steps: Option<u32>) -> String {
    match steps {
        Some(steps) => format!("page - {}", steps),
        None => "page -".to_string(),
    }
}

/// Join condition fragments with `and`
///
/// ```
/// use cueline_cmd::functions::condition_and;
///
/// assert_eq!(
///     condition_and(&["PresetType 1", "Fixture 1 thru 10"]).unwrap(),
///     "PresetType 1 and Fixture 1 thru 10"
/// );
/// ```
pub fn condition_and(conditions: &[&str]) -> Result<String> {
    if conditions.is_empty() {
        return Err(CommandError::MissingArgument("at least one condition"));
    }
    Ok(conditions.join(" and "))
}

/// Prefix a condition with the if keyword
pub fn if_condition(conditions: &[&str]) -> Result<String> {
    Ok(format!("if {}", condition_and(conditions)?))
}
