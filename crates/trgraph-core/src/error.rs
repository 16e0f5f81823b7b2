//! # Codec Errors
//!
//! Failures raised while a single link converts one value into another.
//! Every variant names the value kind (or encoding) involved and carries a
//! rendering of the offending input, so a failed chain can be diagnosed
//! without re-running it.

use thiserror::Error;

/// Error produced by a value codec or a link transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A fixed-width encoding needs more bytes than the kind allows.
    #[error("{kind}: value needs {needed} bytes, at most {max} allowed")]
    Overflow {
        /// Value kind being encoded or decoded.
        kind: String,
        /// Bytes the value actually needs.
        needed: usize,
        /// Declared byte width of the kind.
        max: usize,
    },

    /// The value lies outside what the target representation can express.
    #[error("{kind}: value {value} is out of range")]
    OutOfRange {
        /// Value kind being produced.
        kind: String,
        /// Rendering of the rejected value.
        value: String,
    },

    /// A literal (boolean token, integer text, 0/1 flag) is not accepted.
    #[error("{kind}: invalid literal {value:?}")]
    InvalidLiteral {
        /// Value kind the literal was meant to represent.
        kind: String,
        /// The rejected literal.
        value: String,
    },

    /// Text could not be decoded with, or bytes encoded into, an encoding.
    #[error("{encoding} codec error: {reason}")]
    Encoding {
        /// Encoding name (`utf8`, `base58`, ...).
        encoding: String,
        /// Why the codec rejected the input.
        reason: String,
    },

    /// A calendar string or packed date is malformed.
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate {
        /// Rendering of the rejected date.
        value: String,
        /// Which field or rule was violated.
        reason: String,
    },

    /// A link received a value of a different representation than it handles.
    #[error("expected {expected} value, found {found}")]
    Representation {
        /// Representation the link handles.
        expected: String,
        /// Representation it was given.
        found: String,
    },

    /// A country code is not present in the ISO 3166 table.
    #[error("{table}: unknown country code {code:?}")]
    LookupFailure {
        /// The table that was queried (`numeric`, `alpha2`, `alpha3`).
        table: String,
        /// The code that was looked up.
        code: String,
    },
}

impl CodecError {
    pub(crate) fn encoding(encoding: &str, reason: impl std::fmt::Display) -> Self {
        Self::Encoding {
            encoding: encoding.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
