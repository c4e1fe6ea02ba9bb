//! List and info function keywords
//!
//! List prints show data to the command line feedback window and can export
//! it to a CSV report with `/filename=`. Info attaches or displays free-text
//! notes on objects.

use crate::error::Result;
use crate::ident::{Ident, Selection};
use crate::options::{serialize_options, Options};
use crate::quote::quote_name;
use crate::registry::{PresetType, LIST_OPTIONS};

/// List show data, optionally narrowed to an object selection
///
/// ```
/// use cueline_cmd::functions::list_objects;
/// use cueline_cmd::Options;
///
/// assert_eq!(list_objects(Some("cue"), None, &Options::new()).unwrap(), "list cue");
/// assert_eq!(
///     list_objects(Some("group"), Some(1.into()), &Options::new().with("filename", "my_groups")).unwrap(),
///     "list group 1 /filename=my_groups"
/// );
/// ```
pub fn list_objects(
    object_type: Option<&str>,
    sel: Option<Selection>,
    options: &Options,
) -> Result<String> {
    let mut cmd = match object_type {
        Some(object_type) => format!("list {}", object_type),
        None => "list".to_string(),
    };
    if let Some(sel) = sel {
        cmd = format!("{} {}", cmd, sel.render()?);
    }
    cmd.push_str(&serialize_options(options, &LIST_OPTIONS));
    Ok(cmd)
}

/// List everything up to an id: `list group thru 10`
pub fn list_thru(object_type: &str, end: impl Into<Ident>) -> String {
    format!("list {} thru {}", object_type, end.into())
}

/// List cues of the selected executor or an explicit sequence
pub fn list_cue(
    sel: Option<Selection>,
    sequence: Option<u32>,
    filename: Option<&str>,
) -> Result<String> {
    let mut cmd = "list cue".to_string();
    if let Some(sel) = sel {
        cmd = format!("{} {}", cmd, sel.render()?);
    }
    if let Some(sequence) = sequence {
        cmd = format!("{} sequence {}", cmd, sequence);
    }
    let options = Options::new().with_opt("filename", filename);
    cmd.push_str(&serialize_options(&options, &LIST_OPTIONS));
    Ok(cmd)
}

/// List groups in the pool
pub fn list_group(sel: Option<Selection>, filename: Option<&str>) -> Result<String> {
    let mut cmd = "list group".to_string();
    if let Some(sel) = sel {
        cmd = format!("{} {}", cmd, sel.render()?);
    }
    let options = Options::new().with_opt("filename", filename);
    cmd.push_str(&serialize_options(&options, &LIST_OPTIONS));
    Ok(cmd)
}

/// List presets, optionally narrowed to a typed pool and a name pattern
///
/// Symbolic type names are quoted on the wire; numeric codes stay bare. A
/// text id such as a wildcard pattern is quoted too.
///
/// ```
/// use cueline_cmd::functions::list_preset;
///
/// assert_eq!(list_preset(None, None, None), "list preset");
/// assert_eq!(list_preset(Some("color".into()), None, None), "list preset \"color\"");
/// assert_eq!(
///     list_preset(Some("color".into()), Some("m*".into()), None),
///     "list preset \"color\".\"m*\""
/// );
/// ```
pub fn list_preset(
    ty: Option<PresetType>,
    id: Option<Ident>,
    filename: Option<&str>,
) -> String {
    let mut cmd = "list preset".to_string();
    if let Some(ty) = ty {
        let type_part = match ty {
            PresetType::Name(name) => quote_name(&name),
            PresetType::Code(code) => code.to_string(),
        };
        cmd = match id {
            Some(Ident::Text(pattern)) => format!("{} {}.{}", cmd, type_part, quote_name(&pattern)),
            Some(id) => format!("{} {}.{}", cmd, type_part, id),
            None => format!("{} {}", cmd, type_part),
        };
    }
    let options = Options::new().with_opt("filename", filename);
    cmd.push_str(&serialize_options(&options, &LIST_OPTIONS));
    cmd
}

/// List all attribute names in the show file
pub fn list_attribute(filename: Option<&str>) -> String {
    let options = Options::new().with_opt("filename", filename);
    format!(
        "list attribute{}",
        serialize_options(&options, &LIST_OPTIONS)
    )
}

/// List the message center, optionally filtered
pub fn list_messages(condition: Option<&str>, filename: Option<&str>) -> String {
    let options = Options::new()
        .with_opt("condition", condition)
        .with_opt("filename", filename);
    format!("list messages{}", serialize_options(&options, &LIST_OPTIONS))
}

/// Attach or display user info on objects
///
/// With text the info is set; without it the existing info is displayed.
///
/// ```
/// use cueline_cmd::functions::info;
///
/// assert_eq!(info("group", 3, None).unwrap(), "info group 3");
/// assert_eq!(
///     info("group", 3, Some("these fixtures are in the backtruss")).unwrap(),
///     "info group 3 \"these fixtures are in the backtruss\""
/// );
/// ```
pub fn info(object_type: &str, sel: impl Into<Selection>, text: Option<&str>) -> Result<String> {
    let mut cmd = format!("info {} {}", object_type, sel.into().render()?);
    if let Some(text) = text {
        cmd = format!("{} {}", cmd, quote_name(text));
    }
    Ok(cmd)
}

/// Attach or display info on a group
pub fn info_group(group_id: u32, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("info group {} {}", group_id, quote_name(text)),
        None => format!("info group {}", group_id),
    }
}

/// Attach or display info on cues, optionally in an explicit sequence
pub fn info_cue(
    sel: impl Into<Selection>,
    sequence: Option<u32>,
    text: Option<&str>,
) -> Result<String> {
    let mut cmd = format!("info cue {}", sel.into().render()?);
    if let Some(sequence) = sequence {
        cmd = format!("{} sequence {}", cmd, sequence);
    }
    if let Some(text) = text {
        cmd = format!("{} {}", cmd, quote_name(text));
    }
    Ok(cmd)
}

/// Attach or display info on a preset in a typed pool
pub fn info_preset(ty: impl Into<PresetType>, preset_id: u32, text: Option<&str>) -> String {
    let mut cmd = format!("info preset {}.{}", ty.into().code(), preset_id);
    if let Some(text) = text {
        cmd = format!("{} {}", cmd, quote_name(text));
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_bare() {
        assert_eq!(list_objects(None, None, &Options::new()).unwrap(), "list");
    }

    #[test]
    fn test_list_object_type() {
        assert_eq!(
            list_objects(Some("cue"), None, &Options::new()).unwrap(),
            "list cue"
        );
        assert_eq!(
            list_objects(Some("attribute"), None, &Options::new()).unwrap(),
            "list attribute"
        );
    }

    #[test]
    fn test_list_with_selection_and_filename() {
        assert_eq!(
            list_objects(
                Some("group"),
                Some(Selection::range(1, 5)),
                &Options::new().with("filename", "my_groups")
            )
            .unwrap(),
            "list group 1 thru 5 /filename=my_groups"
        );
    }

    #[test]
    fn test_list_thru() {
        assert_eq!(list_thru("group", 10), "list group thru 10");
    }

    #[test]
    fn test_list_cue() {
        assert_eq!(list_cue(None, None, None).unwrap(), "list cue");
        assert_eq!(
            list_cue(Some(Selection::range(1, 10)), None, None).unwrap(),
            "list cue 1 thru 10"
        );
        assert_eq!(
            list_cue(None, Some(5), None).unwrap(),
            "list cue sequence 5"
        );
    }

    #[test]
    fn test_list_group() {
        assert_eq!(list_group(None, None).unwrap(), "list group");
        assert_eq!(
            list_group(Some(Selection::range(1, 5)), None).unwrap(),
            "list group 1 thru 5"
        );
    }

    #[test]
    fn test_list_preset() {
        assert_eq!(list_preset(None, None, None), "list preset");
        assert_eq!(
            list_preset(Some("color".into()), None, None),
            "list preset \"color\""
        );
        assert_eq!(
            list_preset(Some("color".into()), Some("m*".into()), None),
            "list preset \"color\".\"m*\""
        );
        assert_eq!(
            list_preset(Some(4.into()), Some("m*".into()), None),
            "list preset 4.\"m*\""
        );
    }

    #[test]
    fn test_list_attribute() {
        assert_eq!(list_attribute(None), "list attribute");
        assert_eq!(
            list_attribute(Some("attrs")),
            "list attribute /filename=attrs"
        );
    }

    #[test]
    fn test_list_messages() {
        assert_eq!(list_messages(None, None), "list messages");
        assert_eq!(
            list_messages(Some("error"), None),
            "list messages /condition=error"
        );
    }

    #[test]
    fn test_info() {
        assert_eq!(info("group", 3, None).unwrap(), "info group 3");
        assert_eq!(info("cue", 1..=5, None).unwrap(), "info cue 1 thru 5");
        assert_eq!(
            info("group", 3, Some("these fixtures are in the backtruss")).unwrap(),
            "info group 3 \"these fixtures are in the backtruss\""
        );
    }

    #[test]
    fn test_info_group() {
        assert_eq!(
            info_group(3, Some("backtruss fixtures")),
            "info group 3 \"backtruss fixtures\""
        );
    }

    #[test]
    fn test_info_cue() {
        assert_eq!(info_cue(5, None, None).unwrap(), "info cue 5");
        assert_eq!(
            info_cue(5, Some(2), None).unwrap(),
            "info cue 5 sequence 2"
        );
        assert_eq!(
            info_cue(1, None, Some("opening look")).unwrap(),
            "info cue 1 \"opening look\""
        );
    }

    #[test]
    fn test_info_preset() {
        assert_eq!(info_preset("color", 1, None), "info preset 2.1");
        assert_eq!(
            info_preset(4, 5, Some("deep blue")),
            "info preset 4.5 \"deep blue\""
        );
    }
}
