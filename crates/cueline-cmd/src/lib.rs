//! Cueline Cmd - Console Command Encoding
//!
//! This crate builds grandMA2-style command strings, including:
//! - Identifier and selection formatting (single, `+` lists, `thru` ranges)
//! - Name quoting rules shared by every labeled object
//! - Option suffix serialization (`/merge`, `/cueonly=true`, `/source=output`)
//! - Object keyword encoders (fixture, cue, preset, dmx, ...)
//! - Function keyword encoders (store, assign, go, label, ...)
//!
//! Everything here is pure: each encoder is a total function from validated
//! inputs to one command string, or a [`CommandError`] the caller can
//! correct. Nothing performs I/O; the produced strings are handed to a
//! transport such as `cueline-remote` unmodified.
//!
//! ## Quick Start
//!
//! ```rust
//! use cueline_cmd::{store_cue, Options};
//!
//! let opts = Options::new().with("merge", true).with("cueonly", true);
//! let cmd = store_cue(1..=10, None, &opts)?;
//! assert_eq!(cmd, "store cue 1 thru 10 /merge /cueonly=true");
//! # Ok::<(), cueline_cmd::CommandError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod functions;
pub mod ident;
pub mod objects;
pub mod options;
pub mod quote;
pub mod registry;

pub use error::{CommandError, Result};
pub use ident::{fmt_decimal, Ident, Selection};
pub use options::{serialize_options, OptionClass, OptionRegistry, OptionValue, Options};
pub use quote::quote_name;
pub use registry::{preset_type_code, PresetType, PRESET_TYPES};

// Flat command surface: orchestration code composes these directly.
pub use functions::*;
pub use objects::*;
