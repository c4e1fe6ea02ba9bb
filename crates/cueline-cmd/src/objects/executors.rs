//! Executor object keyword

use crate::error::Result;
use crate::ident::Selection;

use super::keyword_selection;

/// Reference executors
pub fn executor(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("executor", sel.into())
}

/// Reference an executor on a specific page as `executor {page}.{id}`
///
/// Page qualification only applies to a single executor; combining it with
/// a list or range is an invalid combination.
pub fn executor_on_page(page: u32, sel: impl Into<Selection>) -> Result<String> {
    let id = sel
        .into()
        .into_single("page qualifier requires a single executor")?;
    Ok(format!("executor {}.{}", page, id))
}
