//! Edit, copy, move, delete and remove function keywords

use crate::error::Result;
use crate::ident::Selection;
use crate::options::{serialize_options, Options};
use crate::registry::{PresetType, COPY_OPTIONS, DELETE_OPTIONS};

/// Edit the current cue of the selected executor: `edit`
pub fn edit() -> String {
    "edit".to_string()
}

/// Open an editor for specific objects
///
/// ```
/// use cueline_cmd::functions::edit_object;
///
/// assert_eq!(edit_object("effect", 2, false).unwrap(), "edit effect 2");
/// assert_eq!(edit_object("cue", 1..=5, true).unwrap(), "edit cue 1 thru 5 /noconfirm");
/// ```
pub fn edit_object(object_type: &str, sel: impl Into<Selection>, noconfirm: bool) -> Result<String> {
    let mut cmd = format!("edit {} {}", object_type, sel.into().render()?);
    if noconfirm {
        cmd.push_str(" /noconfirm");
    }
    Ok(cmd)
}

/// Copy objects, optionally to a target position
///
/// Without a target the console exports the objects to the clipboard for a
/// later paste.
///
/// ```
/// use cueline_cmd::functions::copy;
/// use cueline_cmd::{Options, Selection};
///
/// assert_eq!(copy("group", 1, Some(5.into()), &Options::new()).unwrap(), "copy group 1 at 5");
/// assert_eq!(copy("cue", 5, None, &Options::new()).unwrap(), "copy cue 5");
/// assert_eq!(
///     copy("group", 1..=3, Some(11.into()), &Options::new()).unwrap(),
///     "copy group 1 thru 3 at 11"
/// );
/// ```
pub fn copy(
    object_type: &str,
    source: impl Into<Selection>,
    target: Option<Selection>,
    options: &Options,
) -> Result<String> {
    let mut cmd = format!("copy {} {}", object_type, source.into().render()?);
    if let Some(target) = target {
        cmd = format!("{} at {}", cmd, target.render()?);
    }
    cmd.push_str(&serialize_options(options, &COPY_OPTIONS));
    Ok(cmd)
}

/// Copy cues, the default object type of copy
pub fn copy_cue(
    source: impl Into<Selection>,
    target: Option<Selection>,
    options: &Options,
) -> Result<String> {
    copy("cue", source, target, options)
}

/// Move objects to new ids, swapping when the destination is taken
///
/// A list destination must pair up with the source list element for element.
///
/// ```
/// use cueline_cmd::functions::move_object;
///
/// assert_eq!(move_object("group", 5, 9).unwrap(), "move group 5 at 9");
/// assert_eq!(
///     move_object("preset", vec![1, 3, 5], vec![10, 12, 14]).unwrap(),
///     "move preset 1 + 3 + 5 at 10 + 12 + 14"
/// );
/// ```
pub fn move_object(
    object_type: &str,
    source: impl Into<Selection>,
    target: impl Into<Selection>,
) -> Result<String> {
    Ok(format!(
        "move {} {} at {}",
        object_type,
        source.into().render()?,
        target.into().render()?
    ))
}

/// Delete objects from the show file
///
/// ```
/// use cueline_cmd::functions::delete;
/// use cueline_cmd::Options;
///
/// assert_eq!(delete("group", 3, &Options::new()).unwrap(), "delete group 3");
/// assert_eq!(
///     delete("cue", 1..=5, &Options::new().with("noconfirm", true)).unwrap(),
///     "delete cue 1 thru 5 /noconfirm"
/// );
/// ```
pub fn delete(object_type: &str, sel: impl Into<Selection>, options: &Options) -> Result<String> {
    let mut cmd = format!("delete {} {}", object_type, sel.into().render()?);
    cmd.push_str(&serialize_options(options, &DELETE_OPTIONS));
    Ok(cmd)
}

/// Delete cues, optionally within an explicit sequence
pub fn delete_cue(
    sel: impl Into<Selection>,
    sequence: Option<u32>,
    options: &Options,
) -> Result<String> {
    let mut cmd = format!("delete cue {}", sel.into().render()?);
    if let Some(sequence) = sequence {
        cmd = format!("{} sequence {}", cmd, sequence);
    }
    cmd.push_str(&serialize_options(options, &DELETE_OPTIONS));
    Ok(cmd)
}

/// Delete groups
pub fn delete_group(sel: impl Into<Selection>, noconfirm: bool) -> Result<String> {
    let mut cmd = format!("delete group {}", sel.into().render()?);
    if noconfirm {
        cmd.push_str(" /noconfirm");
    }
    Ok(cmd)
}

/// Delete presets from a typed pool
///
/// ```
/// use cueline_cmd::functions::delete_preset;
///
/// assert_eq!(delete_preset("color", 5, false).unwrap(), "delete preset 2.5");
/// assert_eq!(delete_preset(1, 1..=10, false).unwrap(), "delete preset 1.1 thru 10");
/// ```
pub fn delete_preset(
    ty: impl Into<PresetType>,
    sel: impl Into<Selection>,
    noconfirm: bool,
) -> Result<String> {
    let mut cmd = format!(
        "delete preset {}",
        sel.into().render_qualified(ty.into().code())?
    );
    if noconfirm {
        cmd.push_str(" /noconfirm");
    }
    Ok(cmd)
}

/// Unpatch fixtures (removes the DMX assignment, not the fixture itself)
pub fn delete_fixture(sel: impl Into<Selection>, noconfirm: bool) -> Result<String> {
    let mut cmd = format!("delete fixture {}", sel.into().render()?);
    if noconfirm {
        cmd.push_str(" /noconfirm");
    }
    Ok(cmd)
}

/// Empty the message center: `delete messages`
pub fn delete_messages() -> String {
    "delete messages".to_string()
}

/// Enter a remove value for the next attribute touched: `remove`
pub fn remove() -> String {
    "remove".to_string()
}

/// Enter remove values for specific objects, optionally behind an `if` filter
///
/// ```
/// use cueline_cmd::functions::remove_object;
///
/// assert_eq!(
///     remove_object("fixture", 1, Some("PresetType 1")).unwrap(),
///     "remove fixture 1 if PresetType 1"
/// );
/// ```
pub fn remove_object(
    object_type: &str,
    sel: impl Into<Selection>,
    if_filter: Option<&str>,
) -> Result<String> {
    let mut cmd = format!("remove {} {}", object_type, sel.into().render()?);
    if let Some(filter) = if_filter {
        cmd = format!("{} if {}", cmd, filter);
    }
    Ok(cmd)
}

/// Enter remove values for every attribute of the current selection
pub fn remove_selection() -> String {
    "remove selection".to_string()
}

/// Enter remove values for one preset type
///
/// Symbolic type names go to the wire quoted; numeric codes go bare.
pub fn remove_preset_type(ty: impl Into<PresetType>, if_filter: Option<&str>) -> String {
    let mut cmd = match ty.into() {
        PresetType::Name(name) => format!("remove presettype \"{}\"", name),
        PresetType::Code(code) => format!("remove presettype {}", code),
    };
    if let Some(filter) = if_filter {
        cmd = format!("{} if {}", cmd, filter);
    }
    cmd
}

/// Enter remove values for specific fixtures
pub fn remove_fixture(sel: impl Into<Selection>, if_filter: Option<&str>) -> Result<String> {
    remove_object("fixture", sel, if_filter)
}

/// Enter remove values for effects
pub fn remove_effect(sel: impl Into<Selection>) -> Result<String> {
    Ok(format!("remove effect {}", sel.into().render()?))
}
