//! # Text Encodings
//!
//! String ⇄ byte codecs behind the `<encoding>-bytes` and `bytes-<encoding>`
//! links. Every codec is strict and round-trip safe: malformed input is an
//! error, never silently repaired.
//!
//! | node        | alphabet                                 | padding |
//! |-------------|------------------------------------------|---------|
//! | `utf8`      | UTF-8                                    | —       |
//! | `ascii`     | 7-bit ASCII                              | —       |
//! | `hex`       | `0-9a-f` (decoding accepts either case)  | —       |
//! | `base16`    | `0-9A-F`                                 | —       |
//! | `base32`    | RFC 4648 upper case                      | none    |
//! | `base58`    | bitcoin                                  | —       |
//! | `base64`    | RFC 4648 standard                        | none    |
//! | `base64url` | RFC 4648 URL-safe                        | none    |

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use data_encoding::{BASE32_NOPAD, HEXUPPER};

use crate::error::CodecError;

/// Prefix of the `0xhex` textual form.
pub const HEX_PREFIX: &str = "0x";

/// A string encoding of a byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Ascii,
    Hex,
    Base16,
    Base32,
    Base58,
    Base64,
    Base64Url,
}

impl TextEncoding {
    /// Every supported encoding.
    pub const ALL: [Self; 8] = [
        Self::Utf8,
        Self::Ascii,
        Self::Hex,
        Self::Base16,
        Self::Base32,
        Self::Base58,
        Self::Base64,
        Self::Base64Url,
    ];

    /// Node name of the string kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Ascii => "ascii",
            Self::Hex => "hex",
            Self::Base16 => "base16",
            Self::Base32 => "base32",
            Self::Base58 => "base58",
            Self::Base64 => "base64",
            Self::Base64Url => "base64url",
        }
    }

    /// Decode `text` into the bytes it represents.
    pub fn to_bytes(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let name = self.as_str();
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Ascii => {
                if text.is_ascii() {
                    Ok(text.as_bytes().to_vec())
                } else {
                    Err(CodecError::encoding(name, "non-ASCII character"))
                }
            }
            Self::Hex => hex::decode(text).map_err(|e| CodecError::encoding(name, e)),
            Self::Base16 => HEXUPPER
                .decode(text.as_bytes())
                .map_err(|e| CodecError::encoding(name, e)),
            Self::Base32 => BASE32_NOPAD
                .decode(text.as_bytes())
                .map_err(|e| CodecError::encoding(name, e)),
            Self::Base58 => bs58::decode(text)
                .into_vec()
                .map_err(|e| CodecError::encoding(name, e)),
            Self::Base64 => STANDARD_NO_PAD
                .decode(text)
                .map_err(|e| CodecError::encoding(name, e)),
            Self::Base64Url => URL_SAFE_NO_PAD
                .decode(text)
                .map_err(|e| CodecError::encoding(name, e)),
        }
    }

    /// Encode `bytes` as text.
    pub fn to_text(&self, bytes: &[u8]) -> Result<String, CodecError> {
        let name = self.as_str();
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::encoding(name, e)),
            Self::Ascii => {
                if bytes.is_ascii() {
                    // ASCII is valid UTF-8.
                    String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::encoding(name, e))
                } else {
                    Err(CodecError::encoding(name, "byte above 0x7f"))
                }
            }
            Self::Hex => Ok(hex::encode(bytes)),
            Self::Base16 => Ok(HEXUPPER.encode(bytes)),
            Self::Base32 => Ok(BASE32_NOPAD.encode(bytes)),
            Self::Base58 => Ok(bs58::encode(bytes).into_string()),
            Self::Base64 => Ok(STANDARD_NO_PAD.encode(bytes)),
            Self::Base64Url => Ok(URL_SAFE_NO_PAD.encode(bytes)),
        }
    }

    /// True if `text` decodes under this encoding.
    pub fn accepts(&self, text: &str) -> bool {
        self.to_bytes(text).is_ok()
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode a `0x`-prefixed hex string. Strings without the prefix are rejected.
pub fn prefixed_hex_to_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    let digits = text.strip_prefix(HEX_PREFIX).ok_or_else(|| CodecError::InvalidLiteral {
        kind: "0xhex".to_string(),
        value: text.to_string(),
    })?;
    hex::decode(digits).map_err(|e| CodecError::encoding("0xhex", e))
}

/// Encode bytes as lower-case hex with a `0x` prefix.
pub fn bytes_to_prefixed_hex(bytes: &[u8]) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(bytes))
}
