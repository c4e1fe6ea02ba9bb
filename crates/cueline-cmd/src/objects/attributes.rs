//! Attribute and feature object keywords

use crate::ident::Ident;
use crate::quote::quote_name;

/// Reference a fixture attribute by name or number
///
/// Names are quoted; numbers pass through bare. Attribute numbers can shift
/// when fixtures are added, so macros meant to survive patch changes should
/// prefer names.
pub fn attribute(id: impl Into<Ident>) -> String {
    match id.into() {
        Ident::Text(name) => format!("attribute {}", quote_name(&name)),
        other => format!("attribute {}", other),
    }
}

/// Reference a feature group, optionally down to one attribute
///
/// Integers and `$variable` references stay bare, other names are quoted.
/// `attr_num` dot-appends the attribute within the feature.
pub fn feature(id: impl Into<Ident>, attr_num: Option<u32>) -> String {
    let base = match id.into() {
        Ident::Text(name) => quote_name(&name),
        other => other.to_string(),
    };
    match attr_num {
        Some(attr) => format!("feature {}.{}", base, attr),
        None => format!("feature {}", base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_by_name_is_quoted() {
        assert_eq!(attribute("pan"), "attribute \"pan\"");
        assert_eq!(attribute("tilt"), "attribute \"tilt\"");
    }

    #[test]
    fn test_attribute_by_number_is_bare() {
        assert_eq!(attribute(5), "attribute 5");
    }

    #[test]
    fn test_feature() {
        assert_eq!(feature(3, None), "feature 3");
        assert_eq!(feature(3, Some(1)), "feature 3.1");
    }

    #[test]
    fn test_feature_variable_stays_bare() {
        assert_eq!(feature("$feature", Some(1)), "feature $feature.1");
    }

    #[test]
    fn test_feature_name_is_quoted() {
        assert_eq!(feature("Position", None), "feature \"Position\"");
    }
}
