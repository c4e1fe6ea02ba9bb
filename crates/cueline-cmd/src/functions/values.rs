//! At function keywords
//!
//! At applies values to the current selection, or indicates a target for
//! other keywords. It is the one keyword that accepts objects before the
//! function, which gives the `fixture 2 at 50` family below.

use crate::error::{CommandError, Result};
use crate::ident::{fmt_decimal, Ident, Selection};
use crate::options::{serialize_options, Options};
use crate::registry::AT_OPTIONS;

/// What an at command applies
///
/// Exactly one of the value sources must be set. When several are set the
/// highest-priority one wins: fade, then delay, then cue, then value.
/// `sequence` only matters together with `cue`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtArgs {
    /// Direct value, usually a percentage
    pub value: Option<f64>,
    /// Apply as fade time
    pub fade: Option<f64>,
    /// Apply as delay time
    pub delay: Option<f64>,
    /// Apply values from a cue
    pub cue: Option<Ident>,
    /// Sequence holding the cue
    pub sequence: Option<u32>,
}

impl AtArgs {
    /// A direct value
    pub fn value(value: f64) -> Self {
        AtArgs {
            value: Some(value),
            ..Default::default()
        }
    }

    /// A fade time
    pub fn fade(fade: f64) -> Self {
        AtArgs {
            fade: Some(fade),
            ..Default::default()
        }
    }

    /// A delay time
    pub fn delay(delay: f64) -> Self {
        AtArgs {
            delay: Some(delay),
            ..Default::default()
        }
    }

    /// Values from a cue, optionally in an explicit sequence
    pub fn cue(cue: impl Into<Ident>, sequence: Option<u32>) -> Self {
        AtArgs {
            cue: Some(cue.into()),
            sequence,
            ..Default::default()
        }
    }

    // The part after the at keyword.
    fn render(&self) -> Result<String> {
        if let Some(fade) = self.fade {
            return Ok(format!("fade {}", fmt_decimal(fade)));
        }
        if let Some(delay) = self.delay {
            return Ok(format!("delay {}", fmt_decimal(delay)));
        }
        if let Some(cue) = &self.cue {
            return Ok(match self.sequence {
                Some(sequence) => format!("cue {} sequence {}", cue, sequence),
                None => format!("cue {}", cue),
            });
        }
        if let Some(value) = self.value {
            return Ok(fmt_decimal(value));
        }
        Err(CommandError::MissingArgument("value, cue, fade, or delay"))
    }
}

/// Apply values to the current selection
///
/// ```
/// use cueline_cmd::functions::{at, AtArgs};
/// use cueline_cmd::Options;
///
/// assert_eq!(at(&AtArgs::value(75.0), &Options::new()).unwrap(), "at 75");
/// assert_eq!(at(&AtArgs::cue(3, Some(1)), &Options::new()).unwrap(), "at cue 3 sequence 1");
/// assert_eq!(at(&AtArgs::fade(2.0), &Options::new()).unwrap(), "at fade 2");
/// ```
pub fn at(args: &AtArgs, options: &Options) -> Result<String> {
    let mut cmd = format!("at {}", args.render()?);
    cmd.push_str(&serialize_options(options, &AT_OPTIONS));
    Ok(cmd)
}

/// Apply a direct value: `at 75`
pub fn at_value(value: f64) -> String {
    format!("at {}", fmt_decimal(value))
}

/// Set the current selection to full: `at full`
pub fn at_full() -> String {
    "at full".to_string()
}

/// Set the current selection to zero: `at 0`
pub fn at_zero() -> String {
    "at 0".to_string()
}

/// Set a named attribute: `attribute "Pan" at 20`
pub fn attribute_at(attribute: &str, value: f64) -> String {
    format!(
        "attribute {} at {}",
        crate::quote::quote_name(attribute),
        fmt_decimal(value)
    )
}

/// Set fixtures to a value: `fixture 2 at 50`
pub fn fixture_at(sel: impl Into<Selection>, value: f64) -> Result<String> {
    Ok(format!(
        "fixture {} at {}",
        sel.into().render()?,
        fmt_decimal(value)
    ))
}

/// Copy all values from another fixture: `fixture 2 at fixture 3`
pub fn fixture_at_fixture(sel: impl Into<Selection>, source: impl Into<Ident>) -> Result<String> {
    Ok(format!(
        "fixture {} at fixture {}",
        sel.into().render()?,
        source.into()
    ))
}

/// Set channels to a value: `channel 1 at 75`
pub fn channel_at(sel: impl Into<Selection>, value: f64) -> Result<String> {
    Ok(format!(
        "channel {} at {}",
        sel.into().render()?,
        fmt_decimal(value)
    ))
}

/// Copy all values from another channel: `channel 1 at channel 10`
pub fn channel_at_channel(sel: impl Into<Selection>, source: impl Into<Ident>) -> Result<String> {
    Ok(format!(
        "channel {} at channel {}",
        sel.into().render()?,
        source.into()
    ))
}

/// Select a group and set it to a value: `group 3 at 50`
pub fn group_at(group_id: u32, value: f64) -> String {
    format!("group {} at {}", group_id, fmt_decimal(value))
}

/// Set an executor fader: `executor 3 at 50`
pub fn executor_at(executor_id: u32, value: f64) -> String {
    format!("executor {} at {}", executor_id, fmt_decimal(value))
}

/// Apply a value or time to a preset type range
///
/// ```
/// use cueline_cmd::functions::{preset_type_at, AtArgs};
///
/// assert_eq!(preset_type_at(2..=9, &AtArgs::value(50.0)).unwrap(), "presettype 2 thru 9 at 50");
/// assert_eq!(preset_type_at(2..=9, &AtArgs::delay(2.0)).unwrap(), "presettype 2 thru 9 at delay 2");
/// ```
pub fn preset_type_at(sel: impl Into<Selection>, args: &AtArgs) -> Result<String> {
    Ok(format!(
        "presettype {} at {}",
        sel.into().render()?,
        args.render()?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_direct_value() {
        assert_eq!(at(&AtArgs::value(75.0), &Options::new()).unwrap(), "at 75");
    }

    #[test]
    fn test_at_decimal_value() {
        assert_eq!(
            at(&AtArgs::value(12.5), &Options::new()).unwrap(),
            "at 12.5"
        );
    }

    #[test]
    fn test_at_cue() {
        assert_eq!(at(&AtArgs::cue(3, None), &Options::new()).unwrap(), "at cue 3");
        assert_eq!(
            at(&AtArgs::cue(3, Some(1)), &Options::new()).unwrap(),
            "at cue 3 sequence 1"
        );
    }

    #[test]
    fn test_at_fade_and_delay() {
        assert_eq!(at(&AtArgs::fade(2.0), &Options::new()).unwrap(), "at fade 2");
        assert_eq!(
            at(&AtArgs::delay(2.0), &Options::new()).unwrap(),
            "at delay 2"
        );
    }

    #[test]
    fn test_at_fade_wins_over_value() {
        let args = AtArgs {
            value: Some(50.0),
            fade: Some(2.0),
            ..Default::default()
        };
        assert_eq!(at(&args, &Options::new()).unwrap(), "at fade 2");
    }

    #[test]
    fn test_at_without_anything_is_an_error() {
        assert!(matches!(
            at(&AtArgs::default(), &Options::new()),
            Err(CommandError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_at_options() {
        let opts = Options::new()
            .with("layer", "fade")
            .with("ignoreselection", true)
            .with("values", false);
        assert_eq!(
            at(&AtArgs::value(50.0), &opts).unwrap(),
            "at 50 /layer=fade /ignoreselection /values=false"
        );
    }

    #[test]
    fn test_at_shorthands() {
        assert_eq!(at_value(75.0), "at 75");
        assert_eq!(at_full(), "at full");
        assert_eq!(at_zero(), "at 0");
    }

    #[test]
    fn test_attribute_at() {
        assert_eq!(attribute_at("Pan", 20.0), "attribute \"Pan\" at 20");
        assert_eq!(attribute_at("Tilt", 50.0), "attribute \"Tilt\" at 50");
    }

    #[test]
    fn test_fixture_at() {
        assert_eq!(fixture_at(2, 50.0).unwrap(), "fixture 2 at 50");
        assert_eq!(fixture_at(1..=10, 100.0).unwrap(), "fixture 1 thru 10 at 100");
    }

    #[test]
    fn test_fixture_at_fixture() {
        assert_eq!(fixture_at_fixture(2, 3).unwrap(), "fixture 2 at fixture 3");
    }

    #[test]
    fn test_channel_at() {
        assert_eq!(channel_at(1, 75.0).unwrap(), "channel 1 at 75");
        assert_eq!(
            channel_at_channel(1, 10).unwrap(),
            "channel 1 at channel 10"
        );
    }

    #[test]
    fn test_group_and_executor_at() {
        assert_eq!(group_at(3, 50.0), "group 3 at 50");
        assert_eq!(executor_at(3, 50.0), "executor 3 at 50");
    }

    #[test]
    fn test_preset_type_at() {
        assert_eq!(
            preset_type_at(2..=9, &AtArgs::value(50.0)).unwrap(),
            "presettype 2 thru 9 at 50"
        );
        assert_eq!(
            preset_type_at(2, &AtArgs::fade(1.5)).unwrap(),
            "presettype 2 at fade 1.5"
        );
    }
}
