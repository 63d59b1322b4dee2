//! # Error Types
//!
//! Every failure aborts the whole conversion: there is no degraded output
//! mode. Variants name the error kind so callers can branch on it, and
//! carry the offending token or value.

use thiserror::Error;

/// Main error type for escpwp operations
#[derive(Debug, Error)]
pub enum EscpError {
    /// Bracketed name is not a known directive
    #[error("Unknown directive: [{0}]")]
    UnknownDirective(String),

    /// An on/off directive has no matching close, or a close has no open
    #[error("Unmatched directive: [{0}] has no counterpart")]
    UnmatchedDirective(String),

    /// Unterminated or otherwise broken bracket group
    #[error("Malformed directive at token {position}: {reason}")]
    MalformedDirective { position: usize, reason: String },

    /// Wrong arity, type or value for a directive parameter
    #[error("Invalid argument for [{directive}]: {reason}")]
    InvalidArgument { directive: String, reason: String },

    /// `pragma` appeared more than once
    #[error("Duplicate pragma: [pragma:{0}] after a pragma was already processed")]
    DuplicatePragma(String),

    /// `pragma` appeared after output was emitted
    #[error("Pragma not first: [pragma:{0}] must precede all content")]
    PragmaNotFirst(String),

    #[error("Unknown pragma: {0}")]
    UnknownPragma(String),

    #[error("Unsupported symbol: {0}")]
    UnsupportedSymbol(String),

    #[error("Unknown justification: {0}")]
    UnknownJustification(String),

    #[error("Unknown margin side: {0}")]
    UnknownMarginSide(String),

    #[error("Unknown typeface: {0}")]
    UnknownTypeface(String),

    /// Only text, spaces and newlines may appear inside a box
    #[error("Directive not allowed in box: {0}")]
    DisallowedInBox(String),

    /// A character has no printable representation
    #[error("Unsupported glyph '{ch}' (U+{:04X}) in [{word}]", code_point(.ch))]
    UnsupportedGlyph { word: String, ch: char },

    /// Input and output kinds the CLI cannot convert between
    #[error("Invalid conversion: {0}")]
    InvalidConversion(String),

    /// Invalid configuration file
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EscpError {
    pub(crate) fn invalid_argument(directive: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            directive: directive.to_string(),
            reason: reason.into(),
        }
    }
}

fn code_point(ch: &char) -> u32 {
    *ch as u32
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EscpError>;
