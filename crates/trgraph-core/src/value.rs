//! # Value — The Closed Set of Representations
//!
//! Every value carried through a chain is one of five representations.
//! Semantic kinds (`uint32`, `iso3166alpha2`, `isodate`, ...) are not
//! separate variants: they are predicates over these representations,
//! owned by the graph's nodes.
//!
//! Integers are arbitrary precision throughout so that 256-bit kinds and
//! the unbounded kinds never pass through a machine-width integer.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::ser::{Serialize, Serializer};

use crate::error::CodecError;

/// A value flowing through a transformation chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Arbitrary-precision signed integer.
    Int(BigInt),
    /// Byte sequence.
    Bytes(Vec<u8>),
    /// UTF-8 text (also used for ASCII, encoded forms, ISO dates and country codes).
    Text(String),
    /// IEEE-754 floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl Value {
    /// Short name of the representation, used in diagnostics.
    pub fn repr_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    // Checked accessors for link transforms: a representation mismatch
    // becomes a `CodecError` instead of a panic.

    pub fn try_int(&self) -> Result<&BigInt, CodecError> {
        self.as_int().ok_or_else(|| self.mismatch("integer"))
    }

    pub fn try_bytes(&self) -> Result<&[u8], CodecError> {
        self.as_bytes().ok_or_else(|| self.mismatch("bytes"))
    }

    pub fn try_text(&self) -> Result<&str, CodecError> {
        self.as_text().ok_or_else(|| self.mismatch("text"))
    }

    pub fn try_float(&self) -> Result<f64, CodecError> {
        self.as_float().ok_or_else(|| self.mismatch("float"))
    }

    pub fn try_bool(&self) -> Result<bool, CodecError> {
        self.as_bool().ok_or_else(|| self.mismatch("boolean"))
    }

    fn mismatch(&self, expected: &str) -> CodecError {
        CodecError::Representation {
            expected: expected.to_string(),
            found: self.repr_name().to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Bytes(v) => write!(f, "bytes[0x{}]", hex::encode(v)),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Integers that fit in 64 bits serialize as numbers; wider integers as
/// decimal strings, since most consumers cannot hold them as numbers.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(v) => {
                if let Some(n) = v.to_i64() {
                    serializer.serialize_i64(n)
                } else if let Some(n) = v.to_u64() {
                    serializer.serialize_u64(n)
                } else {
                    serializer.serialize_str(&v.to_string())
                }
            }
            Self::Bytes(v) => v.serialize(serializer),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(BigInt::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(BigInt::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Int(BigInt::from(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
