//! # trgraph-core — Value Codecs for the Transformation Graph
//!
//! The leaf crate of the workspace. It owns the runtime value model and
//! every conversion a built-in link performs, with no knowledge of the
//! graph itself. The `trgraph` crate wires these codecs into named nodes
//! and links.
//!
//! ## Modules
//!
//! - [`value`]: the closed set of representations (`Int`, `Bytes`, `Text`,
//!   `Float`, `Bool`) that flow through a chain.
//! - [`numeric`]: big-endian unsigned and offset-encoded signed integers.
//! - [`encoding`]: text ⇄ bytes codecs (utf8, ascii, hex, base16/32/58/64).
//! - [`float`]: lenient float32 text parsing and binary32 bytes.
//! - [`calendar`] and [`temporal`]: ISO dates, unix time on both epochs,
//!   and the packed byte date with unbounded years.
//! - [`iso3166`]: country code table.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests. Every codec returns [`CodecError`].
//! - Integers never narrow to machine width on a conversion path.

pub mod calendar;
pub mod encoding;
pub mod error;
pub mod float;
pub mod iso3166;
pub mod numeric;
pub mod temporal;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use encoding::TextEncoding;
pub use error::CodecError;
pub use iso3166::{Alpha, Country};
pub use numeric::{IntKind, UintKind, INT_KINDS, UINT_KINDS};
pub use temporal::PackedDate;
pub use value::Value;
