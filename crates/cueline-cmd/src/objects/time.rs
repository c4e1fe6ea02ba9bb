//! Timecode and timer object keywords

use crate::error::Result;
use crate::ident::Selection;

use super::keyword_selection;

/// Reference timecode shows
pub fn timecode(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("timecode", sel.into())
}

/// Reference a timecode show slot as `timecode {id}.{slot}`
///
/// Slot qualification only applies to a single timecode show.
pub fn timecode_in_slot(sel: impl Into<Selection>, slot: u32) -> Result<String> {
    let id = sel
        .into()
        .into_single("slot qualifier requires a single timecode")?;
    Ok(format!("timecode {}.{}", id, slot))
}

/// Select all timecode shows: `timecode thru`
pub fn timecode_all() -> String {
    "timecode thru".to_string()
}

/// Reference timecode slots (the console's eight timecode streams)
pub fn timecode_slot(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("timecodeslot", sel.into())
}

/// Reference timers
pub fn timer(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("timer", sel.into())
}

/// Select all timers: `timer thru`
pub fn timer_all() -> String {
    "timer thru".to_string()
}
