//! # Built-in Catalogue — Nodes and Links Every Graph Starts With
//!
//! ## Nodes
//!
//! | node(s)                                   | admits                                   |
//! |-------------------------------------------|------------------------------------------|
//! | `utf8` `ascii` `hex` `base16` `base32` `base58` `base64` `base64url` | text that decodes under the encoding |
//! | `uint16` … `uint256`                      | integers in `[0, 2^n - 1]`               |
//! | `int16` … `int256`                        | integers in `[-2^(n-1), 2^(n-1) - 1]`    |
//! | `uint`                                    | non-negative integers                    |
//! | `unixtime` `unixtime19`                   | any integer (milliseconds)               |
//! | `float32`                                 | any float                                |
//! | `boolean`                                 | booleans                                 |
//! | `bytes` (spread)                          | byte sequences                           |
//! | `isodate`                                 | ISO 8601 date text, any year width in UTC |
//! | `bytesdate`                               | byte sequences (packed dates)            |
//! | `iso3166numeric` `iso3166alpha2` `iso3166alpha3` | assigned country codes            |
//! | `0xhex`                                   | `0x`-prefixed hex text                   |
//!
//! ## Links
//!
//! Every node has an identity link named after it. Generated families, with
//! `N` ranging over every integer kind (the unsigned, unbounded, unix time
//! and signed kinds):
//!
//! - `bytes-N` / `N-bytes` (big-endian or offset-signed codec),
//! - `bytes-E` / `E-bytes` for every text encoding `E` and for `isodate` (ASCII),
//! - `utf8`/`ascii` ⇄ `boolean`, `N`, `float32`, `iso3166alpha2`, `iso3166alpha3`,
//! - `boolean-N` / `N-boolean`, `unixtime-N` / `N-unixtime` (and `unixtime19`),
//!   `iso3166numeric-N` / `N-iso3166numeric`,
//! - `mod.uintNN` from `uint`, reducing modulo `2^NN`.
//!
//! Hand-written links follow: float bytes, the date and unix time family,
//! country code conversions, `0xhex` and the packed date links. When a
//! generated name and a hand-written one coincide (`unixtime-unixtime19`),
//! the hand-written link wins.
//!
//! ## Pre-epoch unix times
//!
//! `unixtime` and `unixtime19` admit negative milliseconds, so dates before
//! their epoch convert to and from `isodate` and `bytesdate`. The unsigned
//! byte codec behind `unixtime-bytes` and `unixtime19-bytes` has no sign, so
//! those links fail with `OutOfRange` for negative values.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use trgraph_core::encoding::{self, TextEncoding};
use trgraph_core::iso3166::{self, Alpha};
use trgraph_core::numeric::{self, INT_KINDS, UINT_KINDS};
use trgraph_core::temporal::{self, PackedDate};
use trgraph_core::{float, CodecError, Value};

use crate::link::Link;
use crate::node::Node;

pub const BYTES: &str = "bytes";
pub const BOOLEAN: &str = "boolean";
pub const FLOAT32: &str = "float32";
pub const UINT: &str = "uint";
pub const UNIXTIME: &str = "unixtime";
pub const UNIXTIME19: &str = "unixtime19";
pub const ISODATE: &str = "isodate";
pub const BYTESDATE: &str = "bytesdate";
pub const ISO3166_NUMERIC: &str = "iso3166numeric";
pub const ISO3166_ALPHA2: &str = "iso3166alpha2";
pub const ISO3166_ALPHA3: &str = "iso3166alpha3";
pub const PREFIXED_HEX: &str = "0xhex";

/// Text kinds that carry plain strings.
const PLAIN_TEXT: [&str; 2] = ["utf8", "ascii"];

const UNIX_TIMES: [&str; 2] = [UNIXTIME, UNIXTIME19];

/// Shared, lazily built copy of the catalogue that graphs clone from.
pub(crate) struct Catalogue {
    pub(crate) nodes: BTreeMap<String, Node>,
    pub(crate) links: BTreeMap<String, Link>,
}

pub(crate) fn catalogue() -> &'static Catalogue {
    static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();
    CATALOGUE.get_or_init(|| Catalogue {
        nodes: by_name(nodes(), Node::name),
        links: by_name(links(), Link::name),
    })
}

/// Later items replace earlier ones of the same name.
fn by_name<T>(items: Vec<T>, name: impl Fn(&T) -> &str) -> BTreeMap<String, T> {
    items
        .into_iter()
        .map(|item| (name(&item).to_string(), item))
        .collect()
}

/// Every integer kind: unsigned and unbounded first, then signed.
fn integer_kinds() -> impl Iterator<Item = &'static str> {
    UINT_KINDS
        .into_iter()
        .map(|k| k.name)
        .chain(INT_KINDS.into_iter().map(|k| k.name))
}

fn alpha_node(alpha: Alpha) -> &'static str {
    match alpha {
        Alpha::Two => ISO3166_ALPHA2,
        Alpha::Three => ISO3166_ALPHA3,
    }
}

/// The built-in nodes.
pub fn nodes() -> Vec<Node> {
    let mut nodes = Vec::new();

    for enc in TextEncoding::ALL {
        nodes.push(Node::new(enc.as_str(), move |v| {
            v.as_text().is_some_and(|s| enc.accepts(s))
        }));
    }
    for kind in UINT_KINDS {
        if UNIX_TIMES.contains(&kind.name) {
            nodes.push(Node::new(kind.name, |v| v.as_int().is_some()));
        } else {
            nodes.push(Node::new(kind.name, move |v| {
                v.as_int().is_some_and(|n| numeric::uint_admits(&kind, n))
            }));
        }
    }
    for kind in INT_KINDS {
        nodes.push(Node::new(kind.name, move |v| {
            v.as_int().is_some_and(|n| numeric::int_admits(&kind, n))
        }));
    }

    nodes.push(Node::new(FLOAT32, |v| v.as_float().is_some()));
    nodes.push(Node::new(BOOLEAN, |v| v.as_bool().is_some()));
    nodes.push(Node::new(BYTES, |v| v.as_bytes().is_some()).spread());
    nodes.push(Node::new(ISODATE, |v| v.as_text().is_some_and(temporal::is_iso)));
    nodes.push(Node::new(BYTESDATE, |v| v.as_bytes().is_some()));
    nodes.push(Node::new(ISO3166_NUMERIC, |v| {
        v.as_int()
            .and_then(ToPrimitive::to_u16)
            .is_some_and(iso3166::is_numeric)
    }));
    nodes.push(Node::new(ISO3166_ALPHA2, |v| {
        v.as_text().is_some_and(iso3166::is_alpha2)
    }));
    nodes.push(Node::new(ISO3166_ALPHA3, |v| {
        v.as_text().is_some_and(iso3166::is_alpha3)
    }));
    nodes.push(Node::new(PREFIXED_HEX, |v| {
        v.as_text()
            .is_some_and(|s| encoding::prefixed_hex_to_bytes(s).is_ok())
    }));

    nodes
}

/// The built-in links, in registration order.
pub fn links() -> Vec<Link> {
    let mut links: Vec<Link> = nodes().iter().map(|n| Link::identity(n.name())).collect();

    integer_codecs(&mut links);
    text_codecs(&mut links);
    boolean_links(&mut links);
    numeric_text_links(&mut links);
    float_links(&mut links);
    modular_links(&mut links);

    for unix in UNIX_TIMES {
        for num in integer_kinds() {
            links.push(passthrough(unix, num));
            links.push(passthrough(num, unix));
        }
    }
    for alpha in [ISO3166_ALPHA2, ISO3166_ALPHA3] {
        for text in PLAIN_TEXT {
            links.push(passthrough(alpha, text));
            links.push(passthrough(text, alpha));
        }
    }
    for num in integer_kinds() {
        links.push(passthrough(ISO3166_NUMERIC, num));
        links.push(passthrough(num, ISO3166_NUMERIC));
    }

    date_links(&mut links);
    country_links(&mut links);
    hex_links(&mut links);
    packed_date_links(&mut links);

    links
}

/// A link that only re-checks the value against `output`.
fn passthrough(input: &str, output: &str) -> Link {
    Link::new(format!("{input}-{output}"), input, output, |v| Ok(v.clone()))
}

fn integer_codecs(links: &mut Vec<Link>) {
    for kind in UINT_KINDS {
        links.push(Link::new(format!("bytes-{}", kind.name), BYTES, kind.name, |v| {
            Ok(Value::Int(numeric::decode_uint(v.try_bytes()?)))
        }));
        links.push(Link::new(format!("{}-bytes", kind.name), kind.name, BYTES, move |v| {
            numeric::encode_uint(&kind, v.try_int()?).map(Value::Bytes)
        }));
    }
    for kind in INT_KINDS {
        links.push(Link::new(format!("bytes-{}", kind.name), BYTES, kind.name, move |v| {
            numeric::decode_int(&kind, v.try_bytes()?).map(Value::Int)
        }));
        links.push(Link::new(format!("{}-bytes", kind.name), kind.name, BYTES, move |v| {
            numeric::encode_int(&kind, v.try_int()?).map(Value::Bytes)
        }));
    }
}

fn text_codecs(links: &mut Vec<Link>) {
    for enc in TextEncoding::ALL {
        text_codec(links, enc.as_str(), enc);
    }
    text_codec(links, ISODATE, TextEncoding::Ascii);
}

fn text_codec(links: &mut Vec<Link>, name: &'static str, enc: TextEncoding) {
    links.push(Link::new(format!("bytes-{name}"), BYTES, name, move |v| {
        enc.to_text(v.try_bytes()?).map(Value::Text)
    }));
    links.push(Link::new(format!("{name}-bytes"), name, BYTES, move |v| {
        enc.to_bytes(v.try_text()?).map(Value::Bytes)
    }));
}

fn parse_bool(text: &str) -> Result<bool, CodecError> {
    match text {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(CodecError::InvalidLiteral {
            kind: BOOLEAN.to_string(),
            value: other.to_string(),
        }),
    }
}

fn int_to_bool(kind: &str, value: &BigInt) -> Result<bool, CodecError> {
    match value.to_u8() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => Err(CodecError::InvalidLiteral {
            kind: kind.to_string(),
            value: value.to_string(),
        }),
    }
}

fn boolean_links(links: &mut Vec<Link>) {
    for text in PLAIN_TEXT {
        links.push(Link::new(format!("{text}-{BOOLEAN}"), text, BOOLEAN, |v| {
            parse_bool(v.try_text()?).map(Value::Bool)
        }));
        links.push(Link::new(format!("{BOOLEAN}-{text}"), BOOLEAN, text, |v| {
            Ok(Value::Text(v.try_bool()?.to_string()))
        }));
    }
    for num in integer_kinds() {
        links.push(Link::new(format!("{BOOLEAN}-{num}"), BOOLEAN, num, |v| {
            Ok(Value::Int(BigInt::from(u8::from(v.try_bool()?))))
        }));
        links.push(Link::new(format!("{num}-{BOOLEAN}"), num, BOOLEAN, move |v| {
            int_to_bool(num, v.try_int()?).map(Value::Bool)
        }));
    }
}

fn numeric_text_links(links: &mut Vec<Link>) {
    for text in PLAIN_TEXT {
        for num in integer_kinds() {
            links.push(Link::new(format!("{text}-{num}"), text, num, move |v| {
                numeric::parse_decimal(num, v.try_text()?).map(Value::Int)
            }));
            links.push(Link::new(format!("{num}-{text}"), num, text, |v| {
                Ok(Value::Text(v.try_int()?.to_string()))
            }));
        }
    }
}

fn float_links(links: &mut Vec<Link>) {
    for text in PLAIN_TEXT {
        links.push(Link::new(format!("{text}-{FLOAT32}"), text, FLOAT32, |v| {
            Ok(Value::Float(float::parse_lenient(v.try_text()?)))
        }));
        links.push(Link::new(format!("{FLOAT32}-{text}"), FLOAT32, text, |v| {
            Ok(Value::Text(float::format(v.try_float()?)))
        }));
    }
    links.push(Link::new(format!("{BYTES}-{FLOAT32}"), BYTES, FLOAT32, |v| {
        float::from_le_bytes(v.try_bytes()?).map(Value::Float)
    }));
    links.push(Link::new(format!("{FLOAT32}-{BYTES}"), FLOAT32, BYTES, |v| {
        Ok(Value::Bytes(float::to_le_bytes(v.try_float()?)))
    }));
}

fn modular_links(links: &mut Vec<Link>) {
    for kind in UINT_KINDS {
        if let Some(bits) = kind.bits() {
            links.push(Link::new(format!("mod.{}", kind.name), UINT, kind.name, move |v| {
                Ok(Value::Int(numeric::reduce_mod(v.try_int()?, bits)))
            }));
        }
    }
}

fn date_links(links: &mut Vec<Link>) {
    for text in PLAIN_TEXT {
        links.push(passthrough(text, ISODATE));
        links.push(passthrough(ISODATE, text));
    }
    links.push(Link::new("isodate-unixtime", ISODATE, UNIXTIME, |v| {
        temporal::iso_to_unix_millis(v.try_text()?).map(Value::Int)
    }));
    links.push(Link::new("isodate-unixtime19", ISODATE, UNIXTIME19, |v| {
        let ms = temporal::iso_to_unix_millis(v.try_text()?)?;
        Ok(Value::Int(temporal::unix_to_unix19(&ms)))
    }));
    links.push(Link::new("unixtime-isodate", UNIXTIME, ISODATE, |v| {
        temporal::unix_millis_to_iso(v.try_int()?).map(Value::Text)
    }));
    links.push(Link::new("unixtime-unixtime19", UNIXTIME, UNIXTIME19, |v| {
        Ok(Value::Int(temporal::unix_to_unix19(v.try_int()?)))
    }));
    links.push(Link::new("unixtime19-isodate", UNIXTIME19, ISODATE, |v| {
        temporal::unix_millis_to_iso(&temporal::unix19_to_unix(v.try_int()?)).map(Value::Text)
    }));
    links.push(Link::new("unixtime19-unixtime", UNIXTIME19, UNIXTIME, |v| {
        Ok(Value::Int(temporal::unix19_to_unix(v.try_int()?)))
    }));
}

/// Numeric country code carried by an integer value.
fn country_number(value: &BigInt) -> Result<u16, CodecError> {
    value.to_u16().ok_or_else(|| CodecError::LookupFailure {
        table: "numeric".to_string(),
        code: value.to_string(),
    })
}

fn country_links(links: &mut Vec<Link>) {
    for alpha in [Alpha::Two, Alpha::Three] {
        let node = alpha_node(alpha);
        links.push(Link::new(
            format!("{ISO3166_NUMERIC}-{node}"),
            ISO3166_NUMERIC,
            node,
            move |v| {
                let code = iso3166::numeric_to_alpha(country_number(v.try_int()?)?, alpha)?;
                Ok(Value::Text(code.to_string()))
            },
        ));
        links.push(Link::new(
            format!("{node}-{ISO3166_NUMERIC}"),
            node,
            ISO3166_NUMERIC,
            move |v| {
                let numeric = iso3166::alpha_to_numeric(v.try_text()?, alpha)?;
                Ok(Value::Int(BigInt::from(numeric)))
            },
        ));
    }
}

fn hex_links(links: &mut Vec<Link>) {
    links.push(Link::new("0xhex-bytes", PREFIXED_HEX, BYTES, |v| {
        encoding::prefixed_hex_to_bytes(v.try_text()?).map(Value::Bytes)
    }));
    links.push(Link::new("bytes-0xhex", BYTES, PREFIXED_HEX, |v| {
        Ok(Value::Text(encoding::bytes_to_prefixed_hex(v.try_bytes()?)))
    }));
}

fn packed_date_links(links: &mut Vec<Link>) {
    links.push(Link::new("isodate-bytesdate", ISODATE, BYTESDATE, |v| {
        Ok(Value::Bytes(PackedDate::parse_iso(v.try_text()?)?.to_bytes()))
    }));
    links.push(Link::new("bytesdate-isodate", BYTESDATE, ISODATE, |v| {
        Ok(Value::Text(PackedDate::from_bytes(v.try_bytes()?)?.to_iso_string()))
    }));
    links.push(Link::new("bytesdate-unixtime", BYTESDATE, UNIXTIME, |v| {
        Ok(Value::Int(PackedDate::from_bytes(v.try_bytes()?)?.unix_millis()))
    }));
    links.push(Link::new("bytesdate-unixtime19", BYTESDATE, UNIXTIME19, |v| {
        Ok(Value::Int(PackedDate::from_bytes(v.try_bytes()?)?.unix19_millis()))
    }));
    links.push(passthrough(BYTESDATE, BYTES));
    links.push(Link::new("bytes-bytesdate", BYTES, BYTESDATE, |v| {
        PackedDate::from_bytes(v.try_bytes()?)?;
        Ok(v.clone())
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn node_names_are_unique() {
        let nodes = nodes();
        let names: HashSet<_> = nodes.iter().map(Node::name).collect();
        assert_eq!(names.len(), nodes.len());
        assert_eq!(nodes.len(), 30);
    }

    #[test]
    fn only_bytes_is_spread() {
        let spread: Vec<_> = nodes()
            .into_iter()
            .filter(Node::is_spread)
            .map(|n| n.name().to_string())
            .collect();
        assert_eq!(spread, vec![BYTES.to_string()]);
    }

    #[test]
    fn every_link_names_builtin_nodes() {
        let catalogue = catalogue();
        for link in catalogue.links.values() {
            assert!(catalogue.nodes.contains_key(link.input()), "{}", link.name());
            assert!(catalogue.nodes.contains_key(link.output()), "{}", link.name());
        }
    }

    #[test]
    fn every_node_has_identity_link() {
        let catalogue = catalogue();
        for name in catalogue.nodes.keys() {
            let link = &catalogue.links[name];
            assert_eq!(link.input(), name);
            assert_eq!(link.output(), name);
        }
    }

    #[test]
    fn hand_written_link_replaces_generated_one() {
        let link = &catalogue().links["unixtime-unixtime19"];
        let out = link.apply(&Value::from(1)).unwrap();
        assert_eq!(out, Value::from(2_208_988_800_001i64));
    }

    #[test]
    fn modular_links_exist_only_for_fixed_widths() {
        let links = &catalogue().links;
        assert!(links.contains_key("mod.uint16"));
        assert!(links.contains_key("mod.uint256"));
        assert!(!links.contains_key("mod.uint"));
        assert!(!links.contains_key("mod.unixtime"));
    }

    #[test]
    fn int_to_bool_accepts_only_zero_and_one() {
        assert!(!int_to_bool("uint", &BigInt::from(0)).unwrap());
        assert!(int_to_bool("uint", &BigInt::from(1)).unwrap());
        assert!(int_to_bool("uint", &BigInt::from(2)).is_err());
        assert!(int_to_bool("int16", &BigInt::from(-1)).is_err());
    }
}
