//! Selection and programmer-clear function keywords

use crate::error::Result;
use crate::ident::{Ident, Selection};

/// Select fixtures: `selfix fixture {selection}`
///
/// ```
/// use cueline_cmd::functions::select_fixture;
///
/// assert_eq!(select_fixture(1).unwrap(), "selfix fixture 1");
/// assert_eq!(select_fixture(1..=10).unwrap(), "selfix fixture 1 thru 10");
/// assert_eq!(select_fixture(vec![1, 3, 5]).unwrap(), "selfix fixture 1 + 3 + 5");
/// ```
pub fn select_fixture(sel: impl Into<Selection>) -> Result<String> {
    Ok(format!("selfix fixture {}", sel.into().render()?))
}

/// Select fixtures from a start id to the end: `selfix fixture {start} thru`
pub fn select_fixture_from(start: impl Into<Ident>) -> String {
    format!("selfix fixture {} thru", start.into())
}

/// Select fixtures up to an end id: `selfix fixture thru {end}`
pub fn select_fixture_to(end: impl Into<Ident>) -> String {
    format!("selfix fixture thru {}", end.into())
}

/// Select every fixture: `selfix fixture thru`
pub fn select_all_fixtures() -> String {
    "selfix fixture thru".to_string()
}

/// Clear, stepping through selection, active values, then the programmer
pub fn clear() -> String {
    "clear".to_string()
}

/// Deselect all fixtures
pub fn clear_selection() -> String {
    "clearselection".to_string()
}

/// Deactivate all values in the programmer
pub fn clear_active() -> String {
    "clearactive".to_string()
}

/// Empty the programmer entirely
pub fn clear_all() -> String {
    "clearall".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_single() {
        assert_eq!(select_fixture(1).unwrap(), "selfix fixture 1");
    }

    #[test]
    fn test_select_range() {
        assert_eq!(select_fixture(1..=10).unwrap(), "selfix fixture 1 thru 10");
    }

    #[test]
    fn test_select_collapsed_range() {
        assert_eq!(
            select_fixture(Selection::range(4, 4)).unwrap(),
            "selfix fixture 4"
        );
    }

    #[test]
    fn test_select_list() {
        assert_eq!(
            select_fixture(vec![1, 3, 5]).unwrap(),
            "selfix fixture 1 + 3 + 5"
        );
    }

    #[test]
    fn test_open_ended_forms() {
        assert_eq!(select_fixture_from(5), "selfix fixture 5 thru");
        assert_eq!(select_fixture_to(10), "selfix fixture thru 10");
        assert_eq!(select_all_fixtures(), "selfix fixture thru");
    }

    #[test]
    fn test_clear_family() {
        assert_eq!(clear(), "clear");
        assert_eq!(clear_selection(), "clearselection");
        assert_eq!(clear_active(), "clearactive");
        assert_eq!(clear_all(), "clearall");
    }
}
