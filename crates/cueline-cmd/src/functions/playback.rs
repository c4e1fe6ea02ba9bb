//! Playback function keywords
//!
//! Go, goback and goto drive executing objects; the defgo family mirrors the
//! physical Go+, Go- and Pause buttons and always acts on the selected
//! executor. The fast keywords `<<<` and `>>>` jump steps without timing.

use crate::error::Result;
use crate::ident::{fmt_decimal, Ident, Selection};
use crate::options::{serialize_options, Options};
use crate::registry::GO_OPTIONS;

fn playback(keyword: &str, object_type: &str, sel: Selection, options: &Options) -> Result<String> {
    let mut cmd = format!("{} {} {}", keyword, object_type, sel.render()?);
    // userprofile values are quoted on the wire: /userprofile="Klaus"
    cmd.push_str(&serialize_options(
        &options.quoting(&["userprofile"]),
        &GO_OPTIONS,
    ));
    Ok(cmd)
}

/// Activate the next step of an executing object
///
/// ```
/// use cueline_cmd::functions::go;
/// use cueline_cmd::Options;
///
/// assert_eq!(go("executor", 3, &Options::new()).unwrap(), "go executor 3");
/// assert_eq!(
///     go("executor", 3, &Options::new().with("cue_mode", "assert")).unwrap(),
///     "go executor 3 /cue_mode=assert"
/// );
/// ```
pub fn go(object_type: &str, sel: impl Into<Selection>, options: &Options) -> Result<String> {
    playback("go", object_type, sel.into(), options)
}

/// Activate the next step of executors
pub fn go_executor(sel: impl Into<Selection>, options: &Options) -> Result<String> {
    go("executor", sel, options)
}

/// Start a macro: `go macro 2`
pub fn go_macro(macro_id: u32) -> String {
    format!("go macro {}", macro_id)
}

/// Activate the previous step of an executing object
pub fn go_back(object_type: &str, sel: impl Into<Selection>, options: &Options) -> Result<String> {
    playback("goback", object_type, sel.into(), options)
}

/// Activate the previous step of executors
pub fn go_back_executor(sel: impl Into<Selection>, options: &Options) -> Result<String> {
    go_back("executor", sel, options)
}

/// Jump to a cue, optionally on an explicit executor or sequence
///
/// ```
/// use cueline_cmd::functions::goto;
/// use cueline_cmd::Options;
///
/// assert_eq!(goto(3, None, None, &Options::new()), "goto cue 3");
/// assert_eq!(goto(5, Some(4), None, &Options::new()), "goto cue 5 executor 4");
/// assert_eq!(goto(3, None, Some(1), &Options::new()), "goto cue 3 sequence 1");
/// ```
pub fn goto(
    cue: impl Into<Ident>,
    executor: Option<u32>,
    sequence: Option<u32>,
    options: &Options,
) -> String {
    let mut cmd = format!("goto cue {}", cue.into());
    if let Some(executor) = executor {
        cmd = format!("{} executor {}", cmd, executor);
    } else if let Some(sequence) = sequence {
        cmd = format!("{} sequence {}", cmd, sequence);
    }
    cmd.push_str(&serialize_options(
        &options.quoting(&["userprofile"]),
        &GO_OPTIONS,
    ));
    cmd
}

/// Jump to a cue in a sequence: `goto cue 3 sequence 1`
pub fn goto_cue(sequence_id: u32, cue: impl Into<Ident>) -> String {
    format!("goto cue {} sequence {}", cue.into(), sequence_id)
}

/// Run a sequence forward: `go+ sequence 1`
pub fn go_sequence(sequence_id: u32) -> String {
    format!("go+ sequence {}", sequence_id)
}

/// Pause a sequence: `pause sequence 1`
pub fn pause_sequence(sequence_id: u32) -> String {
    format!("pause sequence {}", sequence_id)
}

/// Target of the fast jump keywords
#[derive(Debug, Clone, PartialEq)]
pub enum FastTarget {
    /// One or more executors
    Executor(Selection),
    /// A sequence
    Sequence(u32),
}

impl FastTarget {
    fn render(&self) -> Result<String> {
        match self {
            FastTarget::Executor(sel) => Ok(format!("executor {}", sel.render()?)),
            FastTarget::Sequence(id) => Ok(format!("sequence {}", id)),
        }
    }
}

/// Jump to the previous step without timing: `<<<`
pub fn go_fast_back(target: Option<FastTarget>) -> Result<String> {
    match target {
        Some(target) => Ok(format!("<<< {}", target.render()?)),
        None => Ok("<<<".to_string()),
    }
}

/// Jump to the next step without timing: `>>>`
pub fn go_fast_forward(target: Option<FastTarget>) -> Result<String> {
    match target {
        Some(target) => Ok(format!(">>> {}", target.render()?)),
        None => Ok(">>>".to_string()),
    }
}

/// Previous cue of the selected executor, the console's large Go- button
pub fn def_go_back() -> String {
    "defgoback".to_string()
}

/// Next cue of the selected executor, the console's large Go+ button
pub fn def_go_forward() -> String {
    "defgoforward".to_string()
}

/// Pause the selected executor, the console's large Pause button
pub fn def_go_pause() -> String {
    "defgopause".to_string()
}

/// Temp fader keyword, optionally with a fader level
///
/// ```
/// use cueline_cmd::functions::temp_fader;
///
/// assert_eq!(temp_fader(None), "tempfader");
/// assert_eq!(temp_fader(Some(50.0)), "tempfader 50");
/// ```
pub fn temp_fader(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("tempfader {}", fmt_decimal(value)),
        None => "tempfader".to_string(),
    }
}
