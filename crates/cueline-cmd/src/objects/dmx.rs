//! DMX object keywords
//!
//! DMX addresses direct console output at the patch level, optionally
//! qualified by universe in `universe.address` dot notation. Unlike the
//! other compound forms, universe qualification works per element: a list
//! repeats the universe before every address.

use crate::error::Result;
use crate::ident::Selection;

use super::keyword_selection;

/// Reference DMX addresses
pub fn dmx(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("dmx", sel.into())
}

/// Reference DMX addresses within a universe as `dmx {universe}.{address}`
///
/// ```
/// use cueline_cmd::objects::dmx_in_universe;
///
/// assert_eq!(dmx_in_universe(2, 100).unwrap(), "dmx 2.100");
/// assert_eq!(dmx_in_universe(2, vec![1, 5, 10]).unwrap(), "dmx 2.1 + 2.5 + 2.10");
/// assert_eq!(dmx_in_universe(2, 1..=10).unwrap(), "dmx 2.1 thru 10");
/// ```
pub fn dmx_in_universe(universe: u32, sel: impl Into<Selection>) -> Result<String> {
    Ok(format!(
        "dmx {}",
        sel.into().render_qualified(universe as i64)?
    ))
}

/// Select all DMX addresses: `dmx thru`
pub fn dmx_all() -> String {
    "dmx thru".to_string()
}

/// Reference whole DMX universes
pub fn dmx_universe(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("dmxuniverse", sel.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dmx_single() {
        assert_eq!(dmx(100).unwrap(), "dmx 100");
    }

    #[test]
    fn test_dmx_range_and_list() {
        assert_eq!(dmx(1..=10).unwrap(), "dmx 1 thru 10");
        assert_eq!(dmx(vec![1, 5, 10]).unwrap(), "dmx 1 + 5 + 10");
    }

    #[test]
    fn test_dmx_in_universe() {
        assert_eq!(dmx_in_universe(2, 100).unwrap(), "dmx 2.100");
    }

    #[test]
    fn test_dmx_in_universe_list_repeats_universe() {
        assert_eq!(
            dmx_in_universe(2, vec![1, 5, 10]).unwrap(),
            "dmx 2.1 + 2.5 + 2.10"
        );
    }

    #[test]
    fn test_dmx_in_universe_range() {
        assert_eq!(dmx_in_universe(2, 1..=10).unwrap(), "dmx 2.1 thru 10");
    }

    #[test]
    fn test_dmx_all() {
        assert_eq!(dmx_all(), "dmx thru");
    }

    #[test]
    fn test_dmx_universe() {
        assert_eq!(dmx_universe(1).unwrap(), "dmxuniverse 1");
        assert_eq!(dmx_universe(1..=4).unwrap(), "dmxuniverse 1 thru 4");
    }
}
