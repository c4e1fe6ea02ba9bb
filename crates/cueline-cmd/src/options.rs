//! Option suffix serialization
//!
//! Console commands take a trailing sequence of `/key` and `/key=value`
//! options. Each function keyword understands its own option set, split into
//! three encoding shapes:
//!
//! 1. flag options, emitted as `/key` only when truthy (`/merge`)
//! 2. boolean options, always emitted with a value (`/cueonly=true`)
//! 3. value options, emitted as `/key=value` (`/source=output`)
//!
//! Keys are normalized (underscores stripped, lower-cased) before they are
//! classified; options the function does not understand are dropped without
//! error so callers can pass option sets targeting newer console versions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quote::quote_name;

/// A single option value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    /// Boolean, rendered `true`/`false` (or presence-only for flag options)
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Decimal value
    Float(f64),
    /// Text value, emitted verbatim (pre-quote with [`quote_name`] if the
    /// console expects quotes)
    Text(String),
}

impl OptionValue {
    /// Truthiness used by flag and boolean classifications
    pub fn truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Int(i) => *i != 0,
            OptionValue::Float(f) => *f != 0.0,
            OptionValue::Text(t) => !t.is_empty(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Float(v) => write!(f, "{}", crate::ident::fmt_decimal(*v)),
            OptionValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

macro_rules! option_value_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for OptionValue {
            fn from(value: $ty) -> Self {
                OptionValue::Int(value as i64)
            }
        })*
    };
}

option_value_from_int!(i64, i32, u32, u16, u8);

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// An ordered option set
///
/// Insertion order is preserved; the serialized suffix emits options in the
/// order they were supplied. Absent options are simply never inserted
/// ([`Options::set_opt`] skips `None` for callers holding optional values).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    /// Empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, builder style
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert an option when the value is present, builder style
    pub fn with_opt<V: Into<OptionValue>>(mut self, key: &str, value: Option<V>) -> Self {
        self.set_opt(key, value);
        self
    }

    /// Insert an option
    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) -> &mut Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Insert an option when the value is present; `None` is omitted
    pub fn set_opt<V: Into<OptionValue>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// True when no options were supplied
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy of this option set with the text values of the given keys run
    /// through [`quote_name`]
    ///
    /// Used by functions whose wire format quotes specific values, such as
    /// `/password="secret"` and `/userprofile="Klaus"`.
    pub(crate) fn quoting(&self, keys: &[&str]) -> Options {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| {
                let normalized = normalize_key(key);
                let wants_quotes = keys.iter().any(|k| normalize_key(k) == normalized);
                match value {
                    OptionValue::Text(t) if wants_quotes => {
                        (key.clone(), OptionValue::Text(quote_name(t)))
                    }
                    _ => (key.clone(), value.clone()),
                }
            })
            .collect();
        Options { entries }
    }
}

/// Normalize an option key before classification: strip underscores and
/// lower-case
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// How an option key is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionClass {
    /// `/key`, emitted only when truthy
    Flag,
    /// `/key=true` or `/key=false`
    Boolean,
    /// `/key=value`
    Value,
}

/// The option set one function keyword understands
///
/// Keys are stored in canonical console spelling (`cue_mode` keeps its
/// underscore on the wire even though matching ignores it).
#[derive(Debug, Clone, Copy)]
pub struct OptionRegistry {
    /// Flag options (`/merge`)
    pub flags: &'static [&'static str],
    /// Boolean options (`/cueonly=true`)
    pub bools: &'static [&'static str],
    /// Value options (`/source=output`)
    pub values: &'static [&'static str],
}

impl OptionRegistry {
    /// Classify a key, returning the canonical spelling to emit
    ///
    /// Unknown keys classify to `None`; callers drop them silently to stay
    /// forward compatible with option sets this library does not know yet.
    pub fn classify(&self, key: &str) -> Option<(&'static str, OptionClass)> {
        let normalized = normalize_key(key);
        let find = |table: &'static [&'static str]| {
            table
                .iter()
                .find(|candidate| normalize_key(candidate) == normalized)
                .copied()
        };
        if let Some(canonical) = find(self.flags) {
            return Some((canonical, OptionClass::Flag));
        }
        if let Some(canonical) = find(self.bools) {
            return Some((canonical, OptionClass::Boolean));
        }
        if let Some(canonical) = find(self.values) {
            return Some((canonical, OptionClass::Value));
        }
        None
    }
}

/// Serialize an option set against a function's registry
///
/// Returns the trailing suffix with a leading space (`" /merge /cueonly=true"`)
/// or the empty string when nothing applies.
pub fn serialize_options(options: &Options, registry: &OptionRegistry) -> String {
    let mut parts = Vec::new();
    for (key, value) in options.iter() {
        match registry.classify(key) {
            Some((canonical, OptionClass::Flag)) => {
                if value.truthy() {
                    parts.push(format!("/{}", canonical));
                }
            }
            Some((canonical, OptionClass::Boolean)) => {
                parts.push(format!(
                    "/{}={}",
                    canonical,
                    if value.truthy() { "true" } else { "false" }
                ));
            }
            Some((canonical, OptionClass::Value)) => {
                parts.push(format!("/{}={}", canonical, value));
            }
            None => {} // unknown keys are ignored, never an error
        }
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}
