//! Fixed lookup tables
//!
//! Read-only registries consulted by the object and function encoders: the
//! preset-type name/number table and the per-function option classification
//! tables. All of them are immutable constants; nothing here is ever mutated
//! after process start.

use serde::{Deserialize, Serialize};

use crate::options::OptionRegistry;

/// Preset type name to numeric code
///
/// The console distinguishes preset types by number. Note that `position`
/// and `color` both map to code 2; this mirrors the console numbering the
/// table was transcribed from and is carried forward deliberately.
pub const PRESET_TYPES: &[(&str, i64)] = &[
    ("dimmer", 1),
    ("position", 2),
    ("gobo", 3),
    ("color", 2),
    ("beam", 4),
    ("focus", 5),
    ("control", 6),
    ("shapers", 7),
    ("video", 8),
];

/// Resolve a preset type name to its numeric code
///
/// Lookup is case-insensitive; unrecognized names resolve to code 1.
pub fn preset_type_code(name: &str) -> i64 {
    let lowered = name.to_ascii_lowercase();
    PRESET_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == lowered)
        .map(|(_, code)| *code)
        .unwrap_or(1)
}

/// A preset type given either symbolically or numerically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PresetType {
    /// Numeric type code
    Code(i64),
    /// Symbolic name, resolved through [`PRESET_TYPES`]
    Name(String),
}

impl PresetType {
    /// The numeric code for this preset type
    pub fn code(&self) -> i64 {
        match self {
            PresetType::Code(code) => *code,
            PresetType::Name(name) => preset_type_code(name),
        }
    }
}

macro_rules! preset_type_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for PresetType {
            fn from(value: $ty) -> Self {
                PresetType::Code(value as i64)
            }
        })*
    };
}

preset_type_from_int!(i64, i32, u32, u16, u8);

impl From<&str> for PresetType {
    fn from(value: &str) -> Self {
        PresetType::Name(value.to_string())
    }
}

impl From<String> for PresetType {
    fn from(value: String) -> Self {
        PresetType::Name(value)
    }
}

/// Options understood by the store family
pub const STORE_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &[
        "merge",
        "overwrite",
        "remove",
        "noconfirm",
        "global",
        "selective",
        "universal",
        "auto",
        "trackingshield",
        "embedded",
    ],
    bools: &[
        "cueonly",
        "tracking",
        "keepactive",
        "presetfilter",
        "addnewcontent",
        "originalcontent",
        "effects",
        "values",
        "valuetimes",
    ],
    values: &["source", "useselection", "screen", "x", "y"],
};

/// Options understood by `at`
pub const AT_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &[
        "ignoreselection",
        "disablecolortransform",
        "prefercolorwheel",
        "prefermixcolor",
        "prefercolorboth",
    ],
    bools: &["values", "valuetimes", "effects", "status"],
    values: &["layer"],
};

/// Options understood by `assign`
pub const ASSIGN_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &["reset", "noconfirm"],
    bools: &[],
    values: &[
        "break",
        "multipatch",
        "x",
        "y",
        "special",
        "cue_mode",
        "password",
    ],
};

/// Options understood by `copy`
pub const COPY_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &["overwrite", "merge", "noconfirm"],
    bools: &["status", "cueonly"],
    values: &[],
};

/// Options understood by `delete`
pub const DELETE_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &["deletevalues", "cueonly", "noconfirm", "region", "element"],
    bools: &[],
    values: &[],
};

/// Options understood by `go`, `goback` and `goto`
pub const GO_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &[],
    bools: &[],
    values: &["cue_mode", "userprofile"],
};

/// Options understood by `call`
pub const CALL_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &["layer", "screen", "toggle_activation"],
    bools: &["status"],
    values: &[],
};

/// Options understood by `appearance`
pub const APPEARANCE_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &["reset"],
    bools: &[],
    values: &["color", "r", "g", "b", "h", "s", "br"],
};

/// Options understood by the `list` family
pub const LIST_OPTIONS: OptionRegistry = OptionRegistry {
    flags: &[],
    bools: &[],
    values: &["filename", "condition"],
};
