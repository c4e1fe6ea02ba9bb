//! Error types for command encoding

use thiserror::Error;

/// Command encoding errors
///
/// Every error is caller-correctable input validation: either a function was
/// called without its minimum required information, or with a combination the
/// console grammar cannot express. There is no retry and no partial result;
/// callers fix their arguments and call again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A required argument was not supplied
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Arguments that cannot be combined in the command grammar
    #[error("invalid combination: {0}")]
    InvalidCombination(&'static str),
}

/// Result type for command encoding operations
pub type Result<T> = std::result::Result<T, CommandError>;
