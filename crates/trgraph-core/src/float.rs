//! # Float32 Codec
//!
//! Text parsing is lenient in the way of a browser's `parseFloat`: leading
//! whitespace is skipped, the longest numeric prefix is read and the rest is
//! ignored; text without a numeric prefix parses to NaN rather than failing.
//! Formatting renders the shortest decimal that round-trips, with
//! `NaN`/`Infinity`/`-Infinity` for the non-finite values.
//!
//! Finite values never use exponent notation: `1e21` formats as
//! `1000000000000000000000` and `1e-7` as `0.0000001`. Both still parse back
//! to the same float.
//!
//! Byte form is IEEE-754 binary32, little-endian.

use crate::error::CodecError;

/// Byte length of the binary32 form.
pub const FLOAT32_LEN: usize = 4;

/// Parse the longest numeric prefix of `text`.
pub fn parse_lenient(text: &str) -> f64 {
    let s = text.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    let end = numeric_prefix_len(rest);
    if end == 0 {
        return f64::NAN;
    }
    rest[..end].parse::<f64>().map_or(f64::NAN, |v| sign * v)
}

/// Length of the `digits [. digits] [e [sign] digits]` prefix of `s`.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits = |i: &mut usize| {
        let start = *i;
        while *i < b.len() && b[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    let mut i = 0;
    let int_digits = digits(&mut i);
    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        frac_digits = digits(&mut i);
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mark = i;
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        if digits(&mut i) == 0 {
            i = mark;
        }
    }
    i
}

/// Render a float as text.
pub fn format(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Drops the sign of negative zero.
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Narrow to binary32 and encode little-endian.
pub fn to_le_bytes(value: f64) -> Vec<u8> {
    (value as f32).to_le_bytes().to_vec()
}

/// Decode exactly four little-endian bytes as binary32.
pub fn from_le_bytes(bytes: &[u8]) -> Result<f64, CodecError> {
    let array: [u8; FLOAT32_LEN] = bytes.try_into().map_err(|_| {
        CodecError::encoding(
            "float32",
            format!("expected {FLOAT32_LEN} bytes, got {}", bytes.len()),
        )
    })?;
    Ok(f64::from(f32::from_le_bytes(array)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimals() {
        assert_eq!(parse_lenient("155.1522"), 155.1522);
        assert_eq!(parse_lenient("-2.5e3"), -2500.0);
        assert_eq!(parse_lenient(".5"), 0.5);
        assert_eq!(parse_lenient("7."), 7.0);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_lenient("  12.5kg"), 12.5);
        assert_eq!(parse_lenient("3e"), 3.0);
        assert_eq!(parse_lenient("1e+x"), 1.0);
        assert_eq!(parse_lenient("-Infinity and more"), f64::NEG_INFINITY);
    }

    #[test]
    fn no_numeric_prefix_is_nan() {
        assert!(parse_lenient("abc").is_nan());
        assert!(parse_lenient("").is_nan());
        assert!(parse_lenient(".").is_nan());
        assert!(parse_lenient("-").is_nan());
    }

    #[test]
    fn formatting() {
        assert_eq!(format(155.1522), "155.1522");
        assert_eq!(format(1.0), "1");
        assert_eq!(format(-0.0), "0");
        assert_eq!(format(f64::NAN), "NaN");
        assert_eq!(format(f64::INFINITY), "Infinity");
    }

    #[test]
    fn large_and_small_magnitudes_are_positional() {
        assert_eq!(format(1e21), "1000000000000000000000");
        assert_eq!(format(1e-7), "0.0000001");
        assert_eq!(parse_lenient(&format(1e21)), 1e21);
        assert_eq!(parse_lenient(&format(1e-7)), 1e-7);
    }

    #[test]
    fn binary32_little_endian() {
        assert_eq!(to_le_bytes(1.0), vec![0x00, 0x00, 0x80, 0x3f]);
        let back = from_le_bytes(&to_le_bytes(12.13)).unwrap();
        assert!((back - 12.13).abs() < 1e-6);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            from_le_bytes(&[0, 0, 0]),
            Err(CodecError::Encoding { .. })
        ));
    }
}
