//! Error kinds shared across the engine.
//!
//! `GarsideError` covers recoverable failures raised by factor kinds and by
//! the text surface; `ReplSignal` covers the two REPL-only control-flow
//! signals that are not failures at all.

use std::fmt;

/// Recoverable failures raised anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GarsideError {
    /// A string could not be parsed as a parameter, a factor, or an element.
    ///
    /// Carries a diagnostic naming the offending substring and what was
    /// expected there.
    InvalidString { message: String },

    /// `randomize` was called on a factor kind with no uniform sampling.
    NonRandomizable { kind: &'static str },

    /// `min_ultra_summit` (or a sibling) was invoked on an element that is
    /// not actually in its Ultra Summit Set. This is a contract violation —
    /// it should never surface if callers only pass USS elements.
    NotUltraSummit { element: String },
}

impl fmt::Display for GarsideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GarsideError::InvalidString { message } => write!(f, "{}", message),
            GarsideError::NonRandomizable { kind } => {
                write!(f, "factor kind `{}` does not support randomize()", kind)
            }
            GarsideError::NotUltraSummit { element } => write!(
                f,
                "min_ultra_summit precondition violated: `{}` is not in its Ultra Summit Set",
                element
            ),
        }
    }
}

impl std::error::Error for GarsideError {}

impl GarsideError {
    pub fn invalid_string(message: impl Into<String>) -> Self {
        GarsideError::InvalidString {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the engine.
pub type GarsideResult<T> = Result<T, GarsideError>;

/// REPL-only control-flow signals raised by the input reader.
///
/// These are not `GarsideError` variants: asking for help or aborting a
/// prompt is an expected part of the interaction, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplSignal {
    HelpAskedFor,
    InterruptAskedFor,
}
