//! Fixture and channel object keywords
//!
//! Fixture references fixtures by fixture id, channel by channel id. Both
//! support the `id.sub` dot notation for sub-fixtures and the bare
//! `{keyword} thru` form that selects everything.

use crate::error::Result;
use crate::ident::Selection;

use super::keyword_selection;

/// Reference fixtures by fixture id
///
/// ```
/// use cueline_cmd::objects::fixture;
///
/// assert_eq!(fixture(34).unwrap(), "fixture 34");
/// assert_eq!(fixture(1..=10).unwrap(), "fixture 1 thru 10");
/// assert_eq!(fixture(vec![1, 5, 10]).unwrap(), "fixture 1 + 5 + 10");
/// ```
pub fn fixture(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("fixture", sel.into())
}

/// Reference a sub-fixture as `fixture {id}.{sub}`
///
/// Sub-fixture qualification only applies to a single fixture; a list or a
/// real range is an invalid combination.
pub fn fixture_sub(sel: impl Into<Selection>, sub_id: u32) -> Result<String> {
    let id = sel
        .into()
        .into_single("sub-fixture id requires a single fixture")?;
    Ok(format!("fixture {}.{}", id, sub_id))
}

/// Select all fixtures: `fixture thru`
pub fn fixture_all() -> String {
    "fixture thru".to_string()
}

/// Reference fixtures by channel id
pub fn channel(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("channel", sel.into())
}

/// Reference a sub-fixture as `channel {id}.{sub}`
pub fn channel_sub(sel: impl Into<Selection>, sub_id: u32) -> Result<String> {
    let id = sel
        .into()
        .into_single("sub-fixture id requires a single channel")?;
    Ok(format!("channel {}.{}", id, sub_id))
}

/// Select all channels: `channel thru`
pub fn channel_all() -> String {
    "channel thru".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    #[test]
    fn test_fixture_single() {
        assert_eq!(fixture(34).unwrap(), "fixture 34");
    }

    #[test]
    fn test_fixture_range() {
        assert_eq!(fixture(1..=10).unwrap(), "fixture 1 thru 10");
    }

    #[test]
    fn test_fixture_list() {
        assert_eq!(fixture(vec![1, 5, 10]).unwrap(), "fixture 1 + 5 + 10");
    }

    #[test]
    fn test_fixture_list_of_one() {
        assert_eq!(fixture(vec![7]).unwrap(), "fixture 7");
    }

    #[test]
    fn test_fixture_sub() {
        assert_eq!(fixture_sub(11, 5).unwrap(), "fixture 11.5");
    }

    #[test]
    fn test_fixture_sub_rejects_list() {
        assert!(matches!(
            fixture_sub(vec![1, 2], 5),
            Err(CommandError::InvalidCombination(_))
        ));
    }

    #[test]
    fn test_fixture_all() {
        assert_eq!(fixture_all(), "fixture thru");
    }

    #[test]
    fn test_channel() {
        assert_eq!(channel(34).unwrap(), "channel 34");
        assert_eq!(channel_sub(11, 5).unwrap(), "channel 11.5");
        assert_eq!(channel_all(), "channel thru");
    }
}
