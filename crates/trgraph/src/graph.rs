//! # Graph — Registry and Chain Executor
//!
//! A [`Graph`] owns two ordered registries, name → [`Node`] and
//! name → [`Link`]. [`Graph::new`] clones them from the built-in catalogue,
//! so every instance is independent; [`Graph::extend`] grows one instance
//! and never touches another.
//!
//! ## Execution
//!
//! [`Graph::transform`] applies the links of a chain in order. For each link
//! it resolves the link and both of its nodes, checks the current value
//! against the input node, runs the transform and checks the result against
//! the output node. Any failure aborts the chain; no later link runs.
//!
//! ## Concurrency
//!
//! `extend` takes `&mut self` and is the only mutating operation. Finish
//! extending before sharing a graph; after that `Graph` is `Send + Sync`
//! and every read path takes `&self`.

use std::collections::BTreeMap;

use tracing::{debug, trace};
use trgraph_core::Value;

use crate::builtins;
use crate::error::{Definition, GraphError, Stage};
use crate::link::Link;
use crate::node::Node;

/// A registry of nodes and links plus the chain executor over it.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
    links: BTreeMap<String, Link>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// A graph seeded with the built-in nodes and links.
    pub fn new() -> Self {
        let catalogue = builtins::catalogue();
        Self {
            nodes: catalogue.nodes.clone(),
            links: catalogue.links.clone(),
        }
    }

    /// A graph with no nodes or links.
    pub fn empty() -> Self {
        Self {
            nodes: BTreeMap::new(),
            links: BTreeMap::new(),
        }
    }

    /// Register new nodes, then new links.
    ///
    /// Fails with [`GraphError::DuplicateDefinition`] on the first name that
    /// is already registered. Items before it stay registered; the failing
    /// item and everything after it are not added.
    pub fn extend(
        &mut self,
        nodes: impl IntoIterator<Item = Node>,
        links: impl IntoIterator<Item = Link>,
    ) -> Result<(), GraphError> {
        let mut added_nodes = 0usize;
        for node in nodes {
            if self.nodes.contains_key(node.name()) {
                return Err(GraphError::DuplicateDefinition {
                    kind: Definition::Node,
                    name: node.name().to_string(),
                });
            }
            self.nodes.insert(node.name().to_string(), node);
            added_nodes += 1;
        }
        let mut added_links = 0usize;
        for link in links {
            if self.links.contains_key(link.name()) {
                return Err(GraphError::DuplicateDefinition {
                    kind: Definition::Link,
                    name: link.name().to_string(),
                });
            }
            self.links.insert(link.name().to_string(), link);
            added_links += 1;
        }
        debug!(nodes = added_nodes, links = added_links, "graph extended");
        Ok(())
    }

    /// Apply `chain` to `value`, checking node membership around every link.
    pub fn transform<S: AsRef<str>>(&self, value: Value, chain: &[S]) -> Result<Value, GraphError> {
        if chain.is_empty() {
            return Err(GraphError::EmptyChain);
        }
        let mut current = value;
        for name in chain {
            current = self.step(current, name.as_ref())?;
        }
        Ok(current)
    }

    fn step(&self, value: Value, name: &str) -> Result<Value, GraphError> {
        let link = self.resolve_link(name)?;
        let input = self.resolve_node(link.input(), link)?;
        let output = self.resolve_node(link.output(), link)?;

        if !input.admits(&value) {
            return Err(mismatch(Stage::Input, input, link, &value));
        }
        let result = link.apply(&value).map_err(|source| GraphError::Transform {
            link: link.name().to_string(),
            source,
        })?;
        if !output.admits(&result) {
            return Err(mismatch(Stage::Output, output, link, &result));
        }
        trace!(link = name, input = input.name(), output = output.name(), "link applied");
        Ok(result)
    }

    fn resolve_link(&self, name: &str) -> Result<&Link, GraphError> {
        self.links
            .get(name)
            .ok_or_else(|| GraphError::UnknownLink(name.to_string()))
    }

    fn resolve_node(&self, name: &str, link: &Link) -> Result<&Node, GraphError> {
        self.nodes.get(name).ok_or_else(|| GraphError::UnknownNode {
            node: name.to_string(),
            link: link.name().to_string(),
        })
    }

    /// The node a chain ends in: the output node of its last link.
    pub fn output_node<S: AsRef<str>>(&self, chain: &[S]) -> Result<&Node, GraphError> {
        let last = chain.last().ok_or(GraphError::EmptyChain)?;
        let link = self.resolve_link(last.as_ref())?;
        self.resolve_node(link.output(), link)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn link(&self, name: &str) -> Option<&Link> {
        self.links.get(name)
    }

    /// Registered node names, sorted.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Registered link names, sorted.
    pub fn link_names(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }
}

fn mismatch(stage: Stage, node: &Node, link: &Link, value: &Value) -> GraphError {
    GraphError::TypeMismatch {
        stage,
        node: node.name().to_string(),
        link: link.name().to_string(),
        value: value.to_string(),
    }
}
