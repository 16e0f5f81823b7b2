//! Links: named, directed conversions between two nodes.

use std::sync::Arc;

use trgraph_core::{CodecError, Value};

/// Conversion performed by a link.
pub type TransformFn = Arc<dyn Fn(&Value) -> Result<Value, CodecError> + Send + Sync>;

/// A named single-step conversion from `input` to `output`.
///
/// Node names are resolved when the link runs, not when it is registered,
/// so a link may name a node that a later `extend` adds.
#[derive(Clone)]
pub struct Link {
    name: String,
    input: String,
    output: String,
    transform: TransformFn,
}

impl Link {
    pub fn new(
        name: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
        transform: impl Fn(&Value) -> Result<Value, CodecError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            output: output.into(),
            transform: Arc::new(transform),
        }
    }

    /// A link from `node` to itself that passes values through unchanged.
    pub fn identity(node: &str) -> Self {
        Self::new(node, node, node, |v| Ok(v.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the node values must belong to on entry.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Name of the node values must belong to on exit.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Run the conversion without any node checks.
    pub fn apply(&self, value: &Value) -> Result<Value, CodecError> {
        (self.transform)(value)
    }
}

impl std::fmt::Debug for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Link")
            .field("name", &self.name)
            .field("input", &self.input)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
