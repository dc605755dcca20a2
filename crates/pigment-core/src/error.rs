//! Error types for the matching engine.
//!
//! Only structurally invalid input is an error. "No match found" is always
//! an ordinary, empty result.

/// Errors produced by color parsing and matcher configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid color format {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: HexErrorKind },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Why a hex color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexErrorKind {
    #[error("empty color string")]
    Empty,
    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Result type alias for convenience.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn hex(input: &str, reason: HexErrorKind) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
            reason,
        }
    }
}
