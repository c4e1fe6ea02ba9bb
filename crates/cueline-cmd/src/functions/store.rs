//! Store function keyword
//!
//! Store writes programmer content into show objects. Its option set is the
//! widest of any function keyword and splits into the three encoding shapes
//! of the store registry: flags (`/merge`), booleans (`/cueonly=true`) and
//! values (`/source=output`).

use crate::error::Result;
use crate::ident::{Ident, Selection};
use crate::options::{serialize_options, Options};
use crate::quote::quote_name;
use crate::registry::{PresetType, STORE_OPTIONS};

/// Store any object type
///
/// ```
/// use cueline_cmd::functions::store;
/// use cueline_cmd::Options;
///
/// assert_eq!(store("macro", 5, None, &Options::new()), "store macro 5");
/// assert_eq!(
///     store("macro", 5, Some("Reset All"), &Options::new()),
///     "store macro 5 \"Reset All\""
/// );
/// ```
pub fn store(object_type: &str, id: impl Into<Ident>, name: Option<&str>, options: &Options) -> String {
    let mut cmd = format!("store {} {}", object_type, id.into());
    if let Some(name) = name {
        cmd = format!("{} {}", cmd, quote_name(name));
    }
    cmd.push_str(&serialize_options(options, &STORE_OPTIONS));
    cmd
}

/// Store cues
///
/// ```
/// use cueline_cmd::functions::store_cue;
/// use cueline_cmd::Options;
///
/// assert_eq!(store_cue(7, None, &Options::new()).unwrap(), "store cue 7");
/// assert_eq!(store_cue(1..=10, None, &Options::new()).unwrap(), "store cue 1 thru 10");
/// ```
pub fn store_cue(sel: impl Into<Selection>, name: Option<&str>, options: &Options) -> Result<String> {
    let mut cmd = format!("store cue {}", sel.into().render()?);
    if let Some(name) = name {
        cmd = format!("{} {}", cmd, quote_name(name));
    }
    cmd.push_str(&serialize_options(options, &STORE_OPTIONS));
    Ok(cmd)
}

/// Store multiple disjoint cue ranges, joined with `+`
///
/// ```
/// use cueline_cmd::functions::store_cue_ranges;
/// use cueline_cmd::Options;
///
/// assert_eq!(
///     store_cue_ranges(&[(1, 10), (20, 30)], None, &Options::new()).unwrap(),
///     "store cue 1 thru 10 + 20 thru 30"
/// );
/// ```
pub fn store_cue_ranges<T>(
    ranges: &[(T, T)],
    name: Option<&str>,
    options: &Options,
) -> Result<String>
where
    T: Copy,
    Ident: From<T>,
{
    if ranges.is_empty() {
        return Err(crate::error::CommandError::MissingArgument(
            "at least one cue range",
        ));
    }
    let parts = ranges
        .iter()
        .map(|(start, end)| Selection::range(*start, *end).render())
        .collect::<Result<Vec<_>>>()?;
    let mut cmd = format!("store cue {}", parts.join(" + "));
    if let Some(name) = name {
        cmd = format!("{} {}", cmd, quote_name(name));
    }
    cmd.push_str(&serialize_options(options, &STORE_OPTIONS));
    Ok(cmd)
}

/// Store the current selection as a group
pub fn store_group(group_id: u32) -> String {
    format!("store group {}", group_id)
}

/// Store a preset in a typed pool
pub fn store_preset(ty: impl Into<PresetType>, preset_id: u32, options: &Options) -> String {
    let mut cmd = format!("store preset {}.{}", ty.into().code(), preset_id);
    cmd.push_str(&serialize_options(options, &STORE_OPTIONS));
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_plain() {
        assert_eq!(store("macro", 5, None, &Options::new()), "store macro 5");
    }

    #[test]
    fn test_store_with_name() {
        assert_eq!(
            store("macro", 5, Some("Reset All"), &Options::new()),
            "store macro 5 \"Reset All\""
        );
    }

    #[test]
    fn test_store_name_not_double_quoted() {
        assert_eq!(
            store("macro", 5, Some("\"Reset All\""), &Options::new()),
            "store macro 5 \"Reset All\""
        );
    }

    #[test]
    fn test_store_cue_single() {
        assert_eq!(store_cue(7, None, &Options::new()).unwrap(), "store cue 7");
    }

    #[test]
    fn test_store_cue_range() {
        assert_eq!(
            store_cue(1..=10, None, &Options::new()).unwrap(),
            "store cue 1 thru 10"
        );
    }

    #[test]
    fn test_store_cue_options_in_supplied_order() {
        let opts = Options::new()
            .with("merge", true)
            .with("cueonly", true)
            .with("source", "output");
        assert_eq!(
            store_cue(7, None, &opts).unwrap(),
            "store cue 7 /merge /cueonly=true /source=output"
        );
    }

    #[test]
    fn test_store_cue_unknown_option_ignored() {
        let opts = Options::new().with("merge", true).with("hologram", true);
        assert_eq!(store_cue(7, None, &opts).unwrap(), "store cue 7 /merge");
    }

    #[test]
    fn test_store_cue_ranges() {
        assert_eq!(
            store_cue_ranges(&[(1, 10), (20, 30)], None, &Options::new()).unwrap(),
            "store cue 1 thru 10 + 20 thru 30"
        );
    }

    #[test]
    fn test_store_cue_ranges_empty_is_an_error() {
        let none: &[(i64, i64)] = &[];
        assert!(store_cue_ranges(none, None, &Options::new()).is_err());
    }

    #[test]
    fn test_store_group() {
        assert_eq!(store_group(3), "store group 3");
    }

    #[test]
    fn test_store_preset() {
        assert_eq!(
            store_preset("dimmer", 3, &Options::new()),
            "store preset 1.3"
        );
        assert_eq!(
            store_preset("dimmer", 3, &Options::new().with("global", true)),
            "store preset 1.3 /global"
        );
    }

    #[test]
    fn test_store_preset_boolean_options() {
        let opts = Options::new()
            .with("selective", true)
            .with("presetfilter", false);
        assert_eq!(
            store_preset(2, 1, &opts),
            "store preset 2.1 /selective /presetfilter=false"
        );
    }
}
