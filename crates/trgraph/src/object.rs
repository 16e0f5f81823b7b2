//! # Object — Documents Walked by a Schema
//!
//! An [`Object`] is an ordered tree of [`Value`] leaves. Key order is kept
//! as given, since the schema transformer's flat output follows it.
//!
//! ## JSON
//!
//! `From<&serde_json::Value>` maps integers to `Value::Int`, other numbers
//! to `Value::Float`, strings to `Value::Text`, booleans to `Value::Bool`,
//! `null` to [`Object::Null`], arrays to [`Object::List`] and objects to
//! [`Object::Map`]. Serializing goes the other way; integers wider than
//! 64 bits become decimal strings and bytes become arrays of numbers.
//!
//! serde_json is built with `arbitrary_precision`, so a number keeps its
//! source text. Integer literals of any width (no `.`, `e` or `E`) are read
//! from that text exactly instead of being rounded through `f64`.

use num_bigint::BigInt;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use trgraph_core::Value;

/// A nested document.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Null,
    Value(Value),
    List(Vec<Object>),
    /// Entries in insertion order.
    Map(Vec<(String, Object)>),
}

impl Object {
    /// Build a map from `(key, object)` pairs, keeping their order.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Object)>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Child at `key`: a map entry, or a list element when `key` is a
    /// decimal index.
    pub fn child(&self, key: &str) -> Option<&Object> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            Self::List(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Self::Null | Self::Value(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Value(_) => "value",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<Value> for Object {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! object_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Object {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

object_from_scalar!(BigInt, i32, i64, u64, f64, bool, String, &str, Vec<u8>);

impl From<&serde_json::Value> for Object {
    fn from(json: &serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Value(Value::Bool(*b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Self::from(i);
                }
                if let Some(u) = n.as_u64() {
                    return Self::from(u);
                }
                let text = n.to_string();
                let integral = !text.contains(['.', 'e', 'E']);
                match text.parse::<BigInt>() {
                    Ok(wide) if integral => Self::Value(Value::Int(wide)),
                    _ => Self::Value(Value::Float(n.as_f64().unwrap_or(f64::NAN))),
                }
            }
            Json::String(s) => Self::from(s.as_str()),
            Json::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            Json::Object(entries) => Self::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Value(v) => v.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_conversion_keeps_key_order() {
        let obj = Object::from(&json!({"b": 1, "a": 2}));
        let Object::Map(entries) = obj else {
            panic!("expected a map");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn json_scalars() {
        assert_eq!(Object::from(&json!(5)), Object::from(5i64));
        assert_eq!(Object::from(&json!(1.5)), Object::from(1.5));
        assert_eq!(Object::from(&json!(true)), Object::from(true));
        assert_eq!(Object::from(&json!("s")), Object::from("s"));
        assert_eq!(Object::from(&json!(null)), Object::Null);
        assert_eq!(Object::from(&json!(u64::MAX)), Object::from(u64::MAX));
    }

    #[test]
    fn child_lookup_on_maps_and_lists() {
        let obj = Object::from(&json!({"list": [10, 20]}));
        let list = obj.child("list").unwrap();
        assert_eq!(list.child("1"), Some(&Object::from(20i64)));
        assert_eq!(list.child("2"), None);
        assert_eq!(list.child("x"), None);
        assert_eq!(obj.child("missing"), None);
    }

    #[test]
    fn serializes_back_to_json() {
        let obj = Object::map([
            ("bytes", Object::from(vec![1u8, 2])),
            ("n", Object::from(7i64)),
            ("none", Object::Null),
        ]);
        assert_eq!(
            serde_json::to_value(&obj).unwrap(),
            json!({"bytes": [1, 2], "n": 7, "none": null})
        );
    }

    #[test]
    fn wide_integers_are_read_exactly() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"n": 18446744073709551616, "neg": -9223372036854775809}"#).unwrap();
        let obj = Object::from(&json);
        assert_eq!(obj.child("n"), Some(&Object::from(BigInt::from(1u8) << 64)));
        assert_eq!(
            obj.child("neg"),
            Some(&Object::from(-(BigInt::from(1u8) << 63u32) - 1u32))
        );
    }

    #[test]
    fn fractional_and_exponent_literals_stay_floats() {
        let json: serde_json::Value = serde_json::from_str(r#"[2.5, 1e3]"#).unwrap();
        let Object::List(items) = Object::from(&json) else {
            panic!("expected a list");
        };
        assert_eq!(items[0], Object::from(2.5));
        assert_eq!(items[1], Object::from(1000.0));
    }
}
