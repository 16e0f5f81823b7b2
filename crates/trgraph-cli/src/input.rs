//! # Input Loading
//!
//! Reads documents and schemas from disk and turns command-line literals
//! into [`Value`]s.
//!
//! Files ending in `.yaml` or `.yml` are read with `serde_yaml`; anything
//! else is read as JSON. Both land in a `serde_json::Value` so key order is
//! kept either way.

use std::path::Path;

use anyhow::{bail, Context, Result};
use trgraph::{Object, Value};

/// Load a JSON or YAML file, chosen by extension.
pub fn load_document(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML: {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON: {}", path.display()))
    }
}

/// Interpret a command-line literal.
///
/// With `as_text` the literal is taken verbatim. Otherwise it is read as
/// JSON: scalars map as in `Object::from`, an array of integers in
/// `0..=255` becomes bytes, and text that is not valid JSON falls back to a
/// plain string.
pub fn parse_literal(literal: &str, as_text: bool) -> Result<Value> {
    if as_text {
        return Ok(Value::from(literal));
    }
    let Ok(json) = serde_json::from_str::<serde_json::Value>(literal) else {
        return Ok(Value::from(literal));
    };
    if let serde_json::Value::Array(items) = &json {
        let bytes: Option<Vec<u8>> = items
            .iter()
            .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect();
        return match bytes {
            Some(bytes) => Ok(Value::Bytes(bytes)),
            None => bail!("array literals must hold integers in 0..=255"),
        };
    }
    match Object::from(&json) {
        Object::Value(value) => Ok(value),
        other => bail!("literal must be a scalar or a byte array, found a {}", other.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn literals_are_json_first() {
        assert_eq!(parse_literal("123", false).unwrap(), Value::from(123i64));
        assert_eq!(parse_literal("true", false).unwrap(), Value::from(true));
        assert_eq!(parse_literal("\"123\"", false).unwrap(), Value::from("123"));
        assert_eq!(parse_literal("1.5", false).unwrap(), Value::from(1.5));
    }

    #[test]
    fn wide_integer_literals_keep_every_digit() {
        let wide = "340282366920938463463374607431768211455";
        assert_eq!(
            parse_literal(wide, false).unwrap(),
            Value::Int(wide.parse().unwrap())
        );
    }

    #[test]
    fn non_json_literal_is_text() {
        assert_eq!(parse_literal("Test", false).unwrap(), Value::from("Test"));
    }

    #[test]
    fn text_flag_skips_json() {
        assert_eq!(parse_literal("123", true).unwrap(), Value::from("123"));
    }

    #[test]
    fn integer_arrays_are_bytes() {
        assert_eq!(parse_literal("[2, 1]", false).unwrap(), Value::from(vec![2u8, 1]));
        assert!(parse_literal("[256]", false).is_err());
        assert!(parse_literal("[\"a\"]", false).is_err());
    }

    #[test]
    fn objects_and_null_are_rejected() {
        assert!(parse_literal("{\"a\": 1}", false).is_err());
        assert!(parse_literal("null", false).is_err());
    }

    #[test]
    fn yaml_and_json_load_the_same_document() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "name: Test\ncount: 2").unwrap();
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(json, "{{\"name\": \"Test\", \"count\": 2}}").unwrap();
        assert_eq!(
            load_document(yaml.path()).unwrap(),
            load_document(json.path()).unwrap()
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_document(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/doc.json"));
    }
}
