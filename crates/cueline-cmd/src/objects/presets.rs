//! Preset and preset-type object keywords
//!
//! Presets live in typed pools addressed as `type.id`. Callers may give the
//! type symbolically (resolved through the fixed preset-type table) or as a
//! raw code, or address presets by label, optionally wildcarded across all
//! types.

use crate::error::{CommandError, Result};
use crate::ident::{Ident, Selection};
use crate::quote::quote_name;
use crate::registry::PresetType;

use super::keyword_selection;

/// Reference presets by bare pool id
pub fn preset(sel: impl Into<Selection>) -> Result<String> {
    keyword_selection("preset", sel.into())
}

/// Reference presets in a typed pool as `preset {type}.{id}`
///
/// Lists qualify every element (`preset 2.1 + 2.3`); ranges qualify the
/// start only (`preset 2.1 thru 5`).
///
/// ```
/// use cueline_cmd::objects::preset_typed;
///
/// assert_eq!(preset_typed("color", 5).unwrap(), "preset 2.5");
/// assert_eq!(preset_typed(3, 2).unwrap(), "preset 3.2");
/// ```
pub fn preset_typed(ty: impl Into<PresetType>, sel: impl Into<Selection>) -> Result<String> {
    let code = ty.into().code();
    Ok(format!("preset {}", sel.into().render_qualified(code)?))
}

/// Reference a preset by label
///
/// `wildcard` addresses all pools: `preset *."Name"`.
pub fn preset_named(name: &str, wildcard: bool) -> String {
    if wildcard {
        format!("preset *.\"{}\"", name)
    } else {
        format!("preset \"{}\"", name)
    }
}

/// Reference a preset by type and label: `preset "color"."Red"`
///
/// A symbolic type is quoted rather than resolved; a numeric type is
/// emitted bare (`preset 3."Red"`).
pub fn preset_typed_named(ty: impl Into<PresetType>, name: &str) -> String {
    let type_part = match ty.into() {
        PresetType::Code(code) => code.to_string(),
        PresetType::Name(name) => format!("\"{}\"", name),
    };
    format!("preset {}.\"{}\"", type_part, name)
}

/// Reference a preset type, optionally down to feature and attribute
///
/// The base may be a numeric code, a name (quoted), or a `$variable`
/// reference (bare). Feature and attribute are dot-appended in that order;
/// an attribute without a feature is an invalid combination.
///
/// ```
/// use cueline_cmd::objects::preset_type;
///
/// assert_eq!(preset_type(3, None, None).unwrap(), "presettype 3");
/// assert_eq!(preset_type("Color", Some(2), None).unwrap(), "presettype \"Color\".2");
/// assert_eq!(preset_type(3, Some(2), Some(1)).unwrap(), "presettype 3.2.1");
/// ```
pub fn preset_type(
    base: impl Into<Ident>,
    feature: Option<i64>,
    attribute: Option<i64>,
) -> Result<String> {
    if attribute.is_some() && feature.is_none() {
        return Err(CommandError::InvalidCombination(
            "attribute requires a feature",
        ));
    }
    let base = match base.into() {
        Ident::Text(text) => quote_name(&text),
        other => other.to_string(),
    };
    let mut cmd = format!("presettype {}", base);
    if let Some(feature) = feature {
        cmd = format!("{}.{}", cmd, feature);
        if let Some(attribute) = attribute {
            cmd = format!("{}.{}", cmd, attribute);
        }
    }
    Ok(cmd)
}
