//! Label and appearance function keywords
//!
//! Label names objects; appearance changes the frame color of pool objects
//! and the background color of cues.

use crate::error::Result;
use crate::ident::{Ident, Selection};
use crate::options::{serialize_options, Options};
use crate::quote::quote_name;
use crate::registry::{PresetType, APPEARANCE_OPTIONS};

/// Name objects
///
/// When a range is labeled and the name ends in a number, the console
/// enumerates the number per object.
///
/// ```
/// use cueline_cmd::functions::label;
///
/// assert_eq!(label("group", 3, "All Studiocolors").unwrap(), "label group 3 \"All Studiocolors\"");
/// assert_eq!(label("fixture", 1..=10, "Mac700 1").unwrap(), "label fixture 1 thru 10 \"Mac700 1\"");
/// ```
pub fn label(object_type: &str, sel: impl Into<Selection>, name: &str) -> Result<String> {
    Ok(format!(
        "label {} {} {}",
        object_type,
        sel.into().render()?,
        quote_name(name)
    ))
}

/// Name a group
pub fn label_group(group_id: u32, name: &str) -> String {
    format!("label group {} {}", group_id, quote_name(name))
}

/// Name a preset in a typed pool
pub fn label_preset(ty: impl Into<PresetType>, preset_id: u32, name: &str) -> String {
    format!(
        "label preset {}.{} {}",
        ty.into().code(),
        preset_id,
        quote_name(name)
    )
}

/// How an appearance command colors its objects
#[derive(Debug, Clone, PartialEq)]
pub enum Appearance {
    /// Reset to the default appearance
    Reset,
    /// Hex color code or gel name, emitted as `/color=`
    Color(String),
    /// RGB components, 0 to 100
    Rgb { r: u8, g: u8, b: u8 },
    /// Hue 0 to 360, saturation and brightness 0 to 100
    Hsb { h: u16, s: u8, br: u8 },
    /// Copy the appearance of another object
    From { object_type: String, id: Ident },
}

/// Change frame or background colors
///
/// ```
/// use cueline_cmd::functions::{appearance, Appearance};
///
/// assert_eq!(
///     appearance("preset", "0.1", &Appearance::Rgb { r: 100, g: 0, b: 0 }).unwrap(),
///     "appearance preset 0.1 /r=100 /g=0 /b=0"
/// );
/// assert_eq!(
///     appearance("group", 1..=5, &Appearance::Color("FF0000".into())).unwrap(),
///     "appearance group 1 thru 5 /color=FF0000"
/// );
/// ```
pub fn appearance(
    object_type: &str,
    sel: impl Into<Selection>,
    look: &Appearance,
) -> Result<String> {
    let head = format!("appearance {} {}", object_type, sel.into().render()?);
    let options = match look {
        Appearance::Reset => Options::new().with("reset", true),
        Appearance::Color(color) => Options::new().with("color", color.clone()),
        Appearance::Rgb { r, g, b } => Options::new()
            .with("r", *r)
            .with("g", *g)
            .with("b", *b),
        Appearance::Hsb { h, s, br } => Options::new()
            .with("h", *h)
            .with("s", *s)
            .with("br", *br),
        Appearance::From { object_type, id } => {
            return Ok(format!("{} at {} {}", head, object_type, id));
        }
    };
    Ok(format!(
        "{}{}",
        head,
        serialize_options(&options, &APPEARANCE_OPTIONS)
    ))
}
