//! # Schema Object Transformer
//!
//! [`Graph::object_transform`] walks a [`Schema`] and the [`Object`] it
//! describes in lockstep. At every chain it runs the value found at the same
//! position through [`Graph::transform`], writes the result at that position
//! of a freshly built output tree, and appends it to a flat list.
//!
//! Chains are visited depth first in the schema's key order, which fixes the
//! order of the flat list. When a chain ends in a spread node the result's
//! bytes are appended one by one, as integers.
//!
//! A missing or `null` value at any schema position is
//! [`GraphError::PathMissing`].

use num_bigint::BigInt;
use serde::Serialize;
use tracing::debug;
use trgraph_core::Value;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::object::Object;
use crate::schema::Schema;

/// Output of [`Graph::object_transform`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformResult {
    /// Transformed values in the shape of the schema.
    pub transformed: Object,
    /// Transformed values in traversal order, spread nodes flattened.
    pub linear: Vec<Value>,
}

impl Graph {
    /// Transform every value of `object` addressed by `schema`.
    pub fn object_transform(
        &self,
        object: &Object,
        schema: &Schema,
    ) -> Result<TransformResult, GraphError> {
        let mut linear = Vec::new();
        let transformed = self.walk(schema, object, &mut Vec::new(), &mut linear)?;
        Ok(TransformResult { transformed, linear })
    }

    fn walk(
        &self,
        schema: &Schema,
        object: &Object,
        path: &mut Vec<String>,
        linear: &mut Vec<Value>,
    ) -> Result<Object, GraphError> {
        match schema {
            Schema::Chain(chain) => {
                let value = match object {
                    Object::Value(v) => v.clone(),
                    Object::Null => return Err(path_missing(path)),
                    container => {
                        return Err(GraphError::InvalidSchema(format!(
                            "at {:?}: chain applied to a {}",
                            path.join("."),
                            container.kind()
                        )))
                    }
                };
                debug!(path = %path.join("."), links = chain.len(), "transforming schema leaf");
                let result = self.transform(value, chain.as_slice())?;
                let spread = self.output_node(chain.as_slice())?.is_spread();
                match &result {
                    Value::Bytes(bytes) if spread => {
                        linear.extend(bytes.iter().map(|b| Value::Int(BigInt::from(*b))));
                    }
                    _ => linear.push(result.clone()),
                }
                Ok(Object::Value(result))
            }
            Schema::Map(entries) => {
                let mut out = Vec::with_capacity(entries.len());
                for (key, sub) in entries {
                    path.push(key.clone());
                    let child = present_child(object, key, path)?;
                    out.push((key.clone(), self.walk(sub, child, path, linear)?));
                    path.pop();
                }
                Ok(Object::Map(out))
            }
            Schema::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, sub) in items.iter().enumerate() {
                    let key = i.to_string();
                    path.push(key.clone());
                    let child = present_child(object, &key, path)?;
                    out.push(self.walk(sub, child, path, linear)?);
                    path.pop();
                }
                Ok(Object::List(out))
            }
        }
    }
}

fn present_child<'a>(object: &'a Object, key: &str, path: &[String]) -> Result<&'a Object, GraphError> {
    object
        .child(key)
        .filter(|child| !child.is_null())
        .ok_or_else(|| path_missing(path))
}

fn path_missing(path: &[String]) -> GraphError {
    GraphError::PathMissing {
        path: path.join("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(object: serde_json::Value, schema: serde_json::Value) -> Result<TransformResult, GraphError> {
        let schema = Schema::try_from(&schema)?;
        Graph::new().object_transform(&Object::from(&object), &schema)
    }

    #[test]
    fn single_leaf() {
        let result = run(json!({"name": "Test"}), json!({"name": ["utf8-bytes", "bytes-uint256"]})).unwrap();
        assert_eq!(result.transformed, Object::map([("name", Object::from(1_415_934_836i64))]));
        assert_eq!(result.linear, vec![Value::from(1_415_934_836i64)]);
    }

    #[test]
    fn spread_output_is_flattened() {
        let result = run(json!({"name": "Test"}), json!({"name": ["utf8-bytes"]})).unwrap();
        let expected: Vec<Value> = [84, 101, 115, 116].into_iter().map(Value::from).collect();
        assert_eq!(result.linear, expected);
        assert_eq!(
            result.transformed,
            Object::map([("name", Object::from(b"Test".to_vec()))])
        );
    }

    #[test]
    fn missing_leaf_is_path_missing() {
        let err = run(json!({}), json!({"name": ["bytes-uint"]})).unwrap_err();
        assert_eq!(err, GraphError::PathMissing { path: "name".into() });
    }

    #[test]
    fn missing_intermediate_is_path_missing() {
        let err = run(json!({"a": null}), json!({"a": {"b": ["uint"]}})).unwrap_err();
        assert_eq!(err, GraphError::PathMissing { path: "a".into() });
    }

    #[test]
    fn list_schema_addresses_by_index() {
        let result = run(json!({"tags": [1, 0]}), json!({"tags": [["uint-boolean"], ["uint-boolean"]]})).unwrap();
        assert_eq!(
            result.transformed,
            Object::map([("tags", Object::List(vec![Object::from(true), Object::from(false)]))])
        );
        assert_eq!(result.linear, vec![Value::from(true), Value::from(false)]);
    }

    #[test]
    fn chain_on_container_is_rejected() {
        let err = run(json!({"a": {"b": 1}}), json!({"a": ["uint"]})).unwrap_err();
        assert!(matches!(err, GraphError::InvalidSchema(_)));
    }

    #[test]
    fn chain_failure_propagates() {
        let err = run(json!({"flag": "yes"}), json!({"flag": ["utf8-boolean"]})).unwrap_err();
        assert!(matches!(err, GraphError::Transform { .. }));
    }

    #[test]
    fn keys_outside_schema_are_ignored() {
        let result = run(json!({"a": 1, "b": 2}), json!({"b": ["uint"]})).unwrap();
        assert_eq!(result.transformed, Object::map([("b", Object::from(2i64))]));
    }
}
