//! # Schema — Chains Arranged in the Shape of a Document
//!
//! A [`Schema`] mirrors the document it is applied to. Its leaves are
//! chains of link names; maps and lists address the document's children by
//! key and by index.
//!
//! In JSON form an array whose elements are all strings is a chain, any
//! other array is a list of sub-schemas, and an object is a map. Anything
//! else is [`GraphError::InvalidSchema`].

use crate::error::GraphError;

/// A tree of chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// Link names applied, in order, to the value at this position.
    Chain(Vec<String>),
    /// Sub-schemas addressed by key, in traversal order.
    Map(Vec<(String, Schema)>),
    /// Sub-schemas addressed by index.
    List(Vec<Schema>),
}

impl Schema {
    pub fn chain<S: Into<String>>(links: impl IntoIterator<Item = S>) -> Self {
        Self::Chain(links.into_iter().map(Into::into).collect())
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Schema)>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Every chain with its dotted path, depth first.
    pub fn chains(&self) -> Vec<(String, &[String])> {
        let mut out = Vec::new();
        self.collect_chains(&mut Vec::new(), &mut out);
        out
    }

    fn collect_chains<'a>(&'a self, path: &mut Vec<String>, out: &mut Vec<(String, &'a [String])>) {
        match self {
            Self::Chain(links) => out.push((path.join("."), links.as_slice())),
            Self::Map(entries) => {
                for (key, sub) in entries {
                    path.push(key.clone());
                    sub.collect_chains(path, out);
                    path.pop();
                }
            }
            Self::List(items) => {
                for (i, sub) in items.iter().enumerate() {
                    path.push(i.to_string());
                    sub.collect_chains(path, out);
                    path.pop();
                }
            }
        }
    }

    fn from_json_at(json: &serde_json::Value, path: &mut Vec<String>) -> Result<Self, GraphError> {
        use serde_json::Value as Json;
        match json {
            Json::Array(items) if items.iter().all(Json::is_string) => Ok(Self::Chain(
                items
                    .iter()
                    .filter_map(Json::as_str)
                    .map(str::to_string)
                    .collect(),
            )),
            Json::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    path.push(i.to_string());
                    out.push(Self::from_json_at(item, path)?);
                    path.pop();
                }
                Ok(Self::List(out))
            }
            Json::Object(entries) => {
                let mut out = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    path.push(key.clone());
                    out.push((key.clone(), Self::from_json_at(item, path)?));
                    path.pop();
                }
                Ok(Self::Map(out))
            }
            other => Err(GraphError::InvalidSchema(format!(
                "at {:?}: expected a chain, list or map, found {other}",
                path.join(".")
            ))),
        }
    }
}

impl TryFrom<&serde_json::Value> for Schema {
    type Error = GraphError;

    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json_at(json, &mut Vec::new())
    }
}
