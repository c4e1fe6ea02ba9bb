//! Layout object keyword

use crate::error::Result;
use crate::ident::Selection;

use super::keyword_selection;

/// Reference layouts
pub fn layout(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("layout", sel.into())
}
