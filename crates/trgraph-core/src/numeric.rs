//! # Numeric Codec — Big-Endian Integers
//!
//! Byte encodings for the integer kinds.
//!
//! ## Unsigned
//!
//! Minimal big-endian magnitude (most significant byte first, zero is a
//! single `0x00`), left-padded with zero bytes to the kind's declared width.
//! A magnitude wider than the declared width is an [`CodecError::Overflow`].
//! Decoding never re-validates the width. The unbounded kinds (`uint`,
//! `unixtime`, `unixtime19`) have no width.
//!
//! ## Signed (offset encoding)
//!
//! For an `n`-bit kind let `MAX = 2^(n-1) - 1`. Non-negative values encode
//! their own magnitude; a negative value `v` encodes the magnitude
//! `MAX + (-v)`, which lands in the upper half of the same width. Decoding
//! reverses it: a magnitude `M > MAX` is the value `-(M - MAX)`.
//!
//! This is **not** two's complement. `-1` in `int16` is `0x80 0x00`, not
//! `0xff 0xff`. The byte pattern is a compatibility contract with existing
//! stored keys and must stay as is. Signed encodings are emitted at their
//! minimal length, without left padding.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed};

use crate::error::CodecError;

/// An unsigned integer kind and its declared byte width (`None` = unbounded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UintKind {
    /// Node name of the kind.
    pub name: &'static str,
    /// Declared byte width, or `None` for unbounded kinds.
    pub bytes: Option<usize>,
}

impl UintKind {
    /// Bit width of a fixed-width kind.
    pub fn bits(&self) -> Option<usize> {
        self.bytes.map(|b| b * 8)
    }
}

/// A signed integer kind and its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntKind {
    /// Node name of the kind.
    pub name: &'static str,
    /// Bit width; always a multiple of 8.
    pub bits: usize,
}

/// Unsigned kinds: the unbounded ones first, then the fixed widths.
pub static UINT_KINDS: [UintKind; 8] = [
    UintKind { name: "uint", bytes: None },
    UintKind { name: "unixtime19", bytes: None },
    UintKind { name: "unixtime", bytes: None },
    UintKind { name: "uint16", bytes: Some(2) },
    UintKind { name: "uint32", bytes: Some(4) },
    UintKind { name: "uint64", bytes: Some(8) },
    UintKind { name: "uint128", bytes: Some(16) },
    UintKind { name: "uint256", bytes: Some(32) },
];

/// Signed kinds.
pub static INT_KINDS: [IntKind; 5] = [
    IntKind { name: "int16", bits: 16 },
    IntKind { name: "int32", bits: 32 },
    IntKind { name: "int64", bits: 64 },
    IntKind { name: "int128", bits: 128 },
    IntKind { name: "int256", bits: 256 },
];

/// Minimal big-endian bytes of a magnitude. Zero is `[0]`.
pub fn to_be_bytes(magnitude: &BigUint) -> Vec<u8> {
    magnitude.to_bytes_be()
}

/// Big-endian magnitude of a byte sequence. The empty sequence is zero.
pub fn from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Largest value of an unsigned `bits`-wide kind: `2^bits - 1`.
pub fn uint_max(bits: usize) -> BigInt {
    (BigInt::one() << bits) - 1u32
}

/// Largest value of a signed `bits`-wide kind: `2^(bits-1) - 1`.
pub fn int_max(bits: usize) -> BigInt {
    (BigInt::one() << (bits - 1)) - 1u32
}

/// Smallest value of a signed `bits`-wide kind: `-2^(bits-1)`.
pub fn int_min(bits: usize) -> BigInt {
    -(BigInt::one() << (bits - 1))
}

/// True if `value` is representable by the unsigned kind.
pub fn uint_admits(kind: &UintKind, value: &BigInt) -> bool {
    if value.is_negative() {
        return false;
    }
    match kind.bits() {
        Some(bits) => *value <= uint_max(bits),
        None => true,
    }
}

/// True if `value` is representable by the signed kind.
pub fn int_admits(kind: &IntKind, value: &BigInt) -> bool {
    int_min(kind.bits) <= *value && *value <= int_max(kind.bits)
}

/// Encode a non-negative integer as big-endian bytes, left-padded to the
/// kind's width.
pub fn encode_uint(kind: &UintKind, value: &BigInt) -> Result<Vec<u8>, CodecError> {
    let magnitude = value.to_biguint().ok_or_else(|| CodecError::OutOfRange {
        kind: kind.name.to_string(),
        value: value.to_string(),
    })?;
    let bytes = to_be_bytes(&magnitude);
    match kind.bytes {
        Some(width) => pad_to_width(kind.name, bytes, width),
        None => Ok(bytes),
    }
}

/// Decode big-endian bytes into an unsigned integer. No width check.
pub fn decode_uint(bytes: &[u8]) -> BigInt {
    BigInt::from_biguint(Sign::Plus, from_be_bytes(bytes))
}

/// Encode a signed integer with the offset scheme described in the module docs.
pub fn encode_int(kind: &IntKind, value: &BigInt) -> Result<Vec<u8>, CodecError> {
    // Above MAX would alias a negative encoding.
    if *value > int_max(kind.bits) {
        return Err(CodecError::OutOfRange {
            kind: kind.name.to_string(),
            value: value.to_string(),
        });
    }
    let shifted = if value.is_negative() {
        int_max(kind.bits) + value.abs()
    } else {
        value.clone()
    };
    // `shifted` is non-negative on both branches.
    let bytes = to_be_bytes(shifted.magnitude());
    let max = kind.bits / 8;
    if bytes.len() > max {
        return Err(CodecError::Overflow {
            kind: kind.name.to_string(),
            needed: bytes.len(),
            max,
        });
    }
    Ok(bytes)
}

/// Decode bytes produced by [`encode_int`].
pub fn decode_int(kind: &IntKind, bytes: &[u8]) -> Result<BigInt, CodecError> {
    let max_len = kind.bits / 8;
    if bytes.len() > max_len {
        return Err(CodecError::Overflow {
            kind: kind.name.to_string(),
            needed: bytes.len(),
            max: max_len,
        });
    }
    let max = int_max(kind.bits);
    let magnitude = decode_uint(bytes);
    if magnitude > max {
        Ok(-(magnitude - max))
    } else {
        Ok(magnitude)
    }
}

/// Reduce `value` modulo `2^bits`. Always yields a value of the `bits` kind.
pub fn reduce_mod(value: &BigInt, bits: usize) -> BigInt {
    let modulus = BigInt::one() << bits;
    value.mod_floor(&modulus)
}

/// Parse a decimal integer literal; surrounding whitespace is ignored.
pub fn parse_decimal(kind: &str, text: &str) -> Result<BigInt, CodecError> {
    text.trim()
        .parse::<BigInt>()
        .map_err(|_| CodecError::InvalidLiteral {
            kind: kind.to_string(),
            value: text.to_string(),
        })
}

fn pad_to_width(kind: &str, bytes: Vec<u8>, width: usize) -> Result<Vec<u8>, CodecError> {
    if bytes.len() > width {
        return Err(CodecError::Overflow {
            kind: kind.to_string(),
            needed: bytes.len(),
            max: width,
        });
    }
    let mut padded = vec![0u8; width - bytes.len()];
    padded.extend_from_slice(&bytes);
    Ok(padded)
}

/// Looks up an unsigned kind by node name.
pub fn uint_kind(name: &str) -> Option<&'static UintKind> {
    UINT_KINDS.iter().find(|k| k.name == name)
}

/// Looks up a signed kind by node name.
pub fn int_kind(name: &str) -> Option<&'static IntKind> {
    INT_KINDS.iter().find(|k| k.name == name)
}
