//! Nodes: named value kinds with a membership predicate.

use std::sync::Arc;

use trgraph_core::Value;

/// Membership test of a node.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A named semantic value kind.
///
/// The predicate is the only admission test for values entering or leaving
/// a link typed with this node. A `spread` node holds byte sequences that
/// are flattened element by element when a schema transform linearizes its
/// output.
#[derive(Clone)]
pub struct Node {
    name: String,
    predicate: Predicate,
    spread: bool,
}

impl Node {
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            spread: false,
        }
    }

    /// Mark the node as spread.
    pub fn spread(mut self) -> Self {
        self.spread = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_spread(&self) -> bool {
        self.spread
    }

    /// True if `value` belongs to this kind.
    pub fn admits(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("spread", &self.spread)
            .finish_non_exhaustive()
    }
}
