//! Assign function keywords
//!
//! Assign defines relationships between objects: sequences onto executors,
//! DMX addresses onto channels, button functions onto executor buttons,
//! objects onto layout positions.

use crate::error::Result;
use crate::ident::{fmt_decimal, Ident, Selection};
use crate::options::{serialize_options, Options};
use crate::registry::ASSIGN_OPTIONS;

/// Where an assign command lands
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget<'a> {
    /// A bare target type with no id: `assign sequence 3 at fader`
    Type(&'a str),
    /// A target type plus selection: `assign sequence 3 at executor 5`
    Object(&'a str, Selection),
}

/// Assign a source selection to an optional target
///
/// ```
/// use cueline_cmd::functions::{assign, AssignTarget};
/// use cueline_cmd::{Options, Selection};
///
/// assert_eq!(
///     assign(
///         "sequence",
///         1..=5,
///         Some(AssignTarget::Object("executor", Selection::range(6, 10))),
///         &Options::new()
///     )
///     .unwrap(),
///     "assign sequence 1 thru 5 at executor 6 thru 10"
/// );
/// assert_eq!(
///     assign("sequence", 3, Some(AssignTarget::Type("fader")), &Options::new()).unwrap(),
///     "assign sequence 3 at fader"
/// );
/// ```
pub fn assign(
    source_type: &str,
    source: impl Into<Selection>,
    target: Option<AssignTarget<'_>>,
    options: &Options,
) -> Result<String> {
    let mut cmd = format!("assign {} {}", source_type, source.into().render()?);
    match target {
        Some(AssignTarget::Type(target_type)) => {
            cmd = format!("{} at {}", cmd, target_type);
        }
        Some(AssignTarget::Object(target_type, target_sel)) => {
            cmd = format!("{} at {} {}", cmd, target_type, target_sel.render()?);
        }
        None => {}
    }
    // password values are quoted on the wire: /password="secret"
    cmd.push_str(&serialize_options(
        &options.quoting(&["password"]),
        &ASSIGN_OPTIONS,
    ));
    Ok(cmd)
}

/// The bare `empty` keyword, assignable to buttons to clear their function
pub fn empty() -> String {
    "empty".to_string()
}

/// Assign a button function such as go or toggle to an executor button
///
/// ```
/// use cueline_cmd::functions::assign_function;
///
/// assert_eq!(assign_function("Toggle", "executor", 101, None), "assign toggle at executor 101");
/// assert_eq!(
///     assign_function("Go", "execbutton1", "1.1", Some("xassert")),
///     "assign go at execbutton1 1.1 /cue_mode=xassert"
/// );
/// ```
pub fn assign_function(
    function: &str,
    target_type: &str,
    target_id: impl Into<Ident>,
    cue_mode: Option<&str>,
) -> String {
    let mut cmd = format!(
        "assign {} at {} {}",
        function.to_ascii_lowercase(),
        target_type,
        target_id.into()
    );
    if let Some(mode) = cue_mode {
        cmd = format!("{} /cue_mode={}", cmd, mode);
    }
    cmd
}

/// Assign a fade time to a cue
///
/// ```
/// use cueline_cmd::functions::assign_fade;
///
/// assert_eq!(assign_fade(3.0, 5, None), "assign fade 3 cue 5");
/// assert_eq!(assign_fade(2.5, 3, Some(1)), "assign fade 2.5 cue 3 sequence 1");
/// ```
pub fn assign_fade(fade_time: f64, cue: impl Into<Ident>, sequence: Option<u32>) -> String {
    let mut cmd = format!("assign fade {} cue {}", fmt_decimal(fade_time), cue.into());
    if let Some(sequence) = sequence {
        cmd = format!("{} sequence {}", cmd, sequence);
    }
    cmd
}

/// Place objects in a layout, optionally at a coordinate
pub fn assign_to_layout(
    object_type: &str,
    sel: impl Into<Selection>,
    layout_id: u32,
    x: Option<i64>,
    y: Option<i64>,
) -> Result<String> {
    let options = Options::new().with_opt("x", x).with_opt("y", y);
    assign(
        object_type,
        sel,
        Some(AssignTarget::Object(
            "layout",
            Selection::from(layout_id as i64),
        )),
        &options,
    )
}
