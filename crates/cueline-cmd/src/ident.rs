//! Object identifiers and selection syntax
//!
//! Console object references are built from identifiers (plain integers,
//! decimal cue numbers, or pre-rendered text such as `$var`) combined into
//! selections: a single id, an explicit `+`-joined list, or a `thru` range.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, Result};

/// Render a decimal identifier the way the console command line expects it:
/// fixed to three fractional digits, then stripped of trailing zeros and a
/// trailing decimal point (`3.500` -> `"3.5"`, `3.000` -> `"3"`).
pub fn fmt_decimal(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// A single object identifier
///
/// `Decimal` exists for cue numbers, the only id type the console accepts
/// with fractional digits (0.001 to 9999.999). `Text` carries pre-rendered
/// fragments the caller already formatted, such as `2.101` (a patched DMX
/// address), `"color"."Red"`, or a `$variable` reference; it is emitted
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ident {
    /// Plain integer id
    Num(i64),
    /// Decimal id, up to three fractional digits
    Decimal(f64),
    /// Pre-rendered text, emitted as-is
    Text(String),
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Num(n) => write!(f, "{}", n),
            Ident::Decimal(d) => write!(f, "{}", fmt_decimal(*d)),
            Ident::Text(t) => f.write_str(t),
        }
    }
}

macro_rules! ident_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Ident {
            fn from(value: $ty) -> Self {
                Ident::Num(value as i64)
            }
        })*
    };
}

ident_from_int!(i64, i32, u64, u32, u16, u8);

impl From<f64> for Ident {
    fn from(value: f64) -> Self {
        Ident::Decimal(value)
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::Text(value.to_string())
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Ident::Text(value)
    }
}

/// A selection of object ids
///
/// The three shapes the console selection syntax knows: a single id, an
/// explicit list joined with `+`, and a contiguous `thru` range. A list of
/// one and a range whose ends coincide are semantically a single id and
/// render identically to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    /// One id
    Single(Ident),
    /// Explicit list, rendered `1 + 3 + 5`
    List(Vec<Ident>),
    /// Contiguous range, rendered `1 thru 10`
    Range {
        /// First id of the range
        start: Ident,
        /// Last id of the range, inclusive
        end: Ident,
    },
}

impl Selection {
    /// Build a range selection
    pub fn range(start: impl Into<Ident>, end: impl Into<Ident>) -> Self {
        Selection::Range {
            start: start.into(),
            end: end.into(),
        }
    }

    /// True when the selection refers to exactly one object
    ///
    /// A one-element list and a collapsed range count as single; compound
    /// qualification (page, pool, sub-id, slot) is only legal for these.
    pub fn is_single(&self) -> bool {
        match self {
            Selection::Single(_) => true,
            Selection::List(ids) => ids.len() == 1,
            Selection::Range { start, end } => start == end,
        }
    }

    /// The sole id of a single-object selection
    pub(crate) fn into_single(self, what: &'static str) -> Result<Ident> {
        match self {
            Selection::Single(id) => Ok(id),
            Selection::List(mut ids) if ids.len() == 1 => Ok(ids.remove(0)),
            Selection::List(ids) if ids.is_empty() => Err(CommandError::MissingArgument(what)),
            Selection::Range { start, end } if start == end => Ok(start),
            _ => Err(CommandError::InvalidCombination(what)),
        }
    }

    /// Render the selection-syntax fragment
    pub fn render(&self) -> Result<String> {
        match self {
            Selection::Single(id) => Ok(id.to_string()),
            Selection::List(ids) => match ids.as_slice() {
                [] => Err(CommandError::MissingArgument("selection must not be empty")),
                [id] => Ok(id.to_string()),
                ids => Ok(ids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" + ")),
            },
            Selection::Range { start, end } => {
                if start == end {
                    Ok(start.to_string())
                } else {
                    Ok(format!("{} thru {}", start, end))
                }
            }
        }
    }

    /// Render with every element prefixed by `qualifier.`
    ///
    /// This is the DMX `universe.address` form: lists repeat the qualifier
    /// per element, ranges qualify only the start (`2.1 thru 10`).
    pub(crate) fn render_qualified(&self, qualifier: i64) -> Result<String> {
        match self {
            Selection::Single(id) => Ok(format!("{}.{}", qualifier, id)),
            Selection::List(ids) => match ids.as_slice() {
                [] => Err(CommandError::MissingArgument("selection must not be empty")),
                [id] => Ok(format!("{}.{}", qualifier, id)),
                ids => Ok(ids
                    .iter()
                    .map(|id| format!("{}.{}", qualifier, id))
                    .collect::<Vec<_>>()
                    .join(" + ")),
            },
            Selection::Range { start, end } => {
                if start == end {
                    Ok(format!("{}.{}", qualifier, start))
                } else {
                    Ok(format!("{}.{} thru {}", qualifier, start, end))
                }
            }
        }
    }
}

impl From<Ident> for Selection {
    fn from(id: Ident) -> Self {
        Selection::Single(id)
    }
}

macro_rules! selection_from_scalar {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Selection {
            fn from(value: $ty) -> Self {
                Selection::Single(value.into())
            }
        })*
    };
}

selection_from_scalar!(i64, i32, u64, u32, u16, u8, f64, &str, String);

impl<T> From<Vec<T>> for Selection
where
    Ident: From<T>,
{
    fn from(values: Vec<T>) -> Self {
        Selection::List(values.into_iter().map(Ident::from).collect())
    }
}

impl<T> From<&[T]> for Selection
where
    T: Clone,
    Ident: From<T>,
{
    fn from(values: &[T]) -> Self {
        Selection::List(values.iter().cloned().map(Ident::from).collect())
    }
}

impl<T> From<RangeInclusive<T>> for Selection
where
    Ident: From<T>,
{
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Selection::Range {
            start: start.into(),
            end: end.into(),
        }
    }
}
