//! Cue and sequence object keywords
//!
//! Cue is the only object type that accepts decimal ids (0.001 to
//! 9999.999); `cue 3.5` and `cue 3.500` are the same cue and encode
//! identically.

use crate::error::Result;
use crate::ident::{Ident, Selection};

use super::keyword_selection;

/// Reference cues
///
/// ```
/// use cueline_cmd::objects::cue;
///
/// assert_eq!(cue(5).unwrap(), "cue 5");
/// assert_eq!(cue(3.5).unwrap(), "cue 3.5");
/// assert_eq!(cue(3.500).unwrap(), "cue 3.5");
/// ```
pub fn cue(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("cue", sel.into())
}

/// Reference cues with trailing qualifiers
///
/// `part`, `executor` and `sequence` are appended after the base selection
/// in that fixed order.
pub fn cue_with(
    sel: impl Into<Selection>,
    part: Option<u32>,
    executor: Option<u32>,
    sequence: Option<u32>,
) -> Result<String> {
    let mut cmd = cue(sel)?;
    if let Some(part) = part {
        cmd = format!("{} part {}", cmd, part);
    }
    if let Some(executor) = executor {
        cmd = format!("{} executor {}", cmd, executor);
    }
    if let Some(sequence) = sequence {
        cmd = format!("{} sequence {}", cmd, sequence);
    }
    Ok(cmd)
}

/// Reference a cue part: `cue {id} part {part}`
pub fn cue_part(id: impl Into<Ident>, part: u32) -> Result<String> {
    cue_with(Selection::Single(id.into()), Some(part), None, None)
}

/// Reference sequences
pub fn sequence(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("sequence", sel.into())
}

/// Reference a sequence in a specific pool as `sequence {pool}.{id}`
///
/// Pool qualification only applies to a single sequence.
pub fn sequence_in_pool(pool: u32, sel: impl Into<Selection>) -> Result<String> {
    let id = sel
        .into()
        .into_single("pool qualifier requires a single sequence")?;
    Ok(format!("sequence {}.{}", pool, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    #[test]
    fn test_cue_integer() {
        assert_eq!(cue(5).unwrap(), "cue 5");
    }

    #[test]
    fn test_cue_decimal() {
        assert_eq!(cue(3.5).unwrap(), "cue 3.5");
        assert_eq!(cue(0.001).unwrap(), "cue 0.001");
    }

    #[test]
    fn test_cue_decimal_trailing_zeros_stripped() {
        assert_eq!(cue(3.500).unwrap(), "cue 3.5");
        assert_eq!(cue(4.0).unwrap(), "cue 4");
    }

    #[test]
    fn test_cue_range_and_list() {
        assert_eq!(cue(1..=10).unwrap(), "cue 1 thru 10");
        assert_eq!(cue(vec![1.0, 3.5, 5.0]).unwrap(), "cue 1 + 3.5 + 5");
    }

    #[test]
    fn test_cue_qualifiers_in_fixed_order() {
        assert_eq!(
            cue_with(3, Some(2), Some(1), Some(4)).unwrap(),
            "cue 3 part 2 executor 1 sequence 4"
        );
        assert_eq!(cue_with(3, None, Some(1), None).unwrap(), "cue 3 executor 1");
        assert_eq!(cue_with(5, None, None, Some(3)).unwrap(), "cue 5 sequence 3");
    }

    #[test]
    fn test_cue_part() {
        assert_eq!(cue_part(3, 2).unwrap(), "cue 3 part 2");
        assert_eq!(cue_part(2.5, 1).unwrap(), "cue 2.5 part 1");
    }

    #[test]
    fn test_sequence() {
        assert_eq!(sequence(3).unwrap(), "sequence 3");
        assert_eq!(sequence(1..=5).unwrap(), "sequence 1 thru 5");
    }

    #[test]
    fn test_sequence_in_pool() {
        assert_eq!(sequence_in_pool(2, 5).unwrap(), "sequence 2.5");
    }

    #[test]
    fn test_pool_rejects_multiple_sequences() {
        assert!(matches!(
            sequence_in_pool(2, vec![1, 2]),
            Err(CommandError::InvalidCombination(_))
        ));
    }
}
