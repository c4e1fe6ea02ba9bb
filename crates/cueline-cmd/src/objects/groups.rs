//! Group object keyword

use crate::error::Result;
use crate::ident::Selection;

use super::keyword_selection;

/// Reference groups
///
/// A group contains a collection of fixtures together with their selection
/// order; calling one selects its fixtures.
pub fn group(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("group", sel.into())
}
