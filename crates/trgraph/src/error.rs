//! # Graph Errors
//!
//! Every failure of registration, chain execution or schema traversal.
//! Each variant carries the link, node, stage or path needed to diagnose it
//! without re-running the chain. Codec failures raised inside a link are
//! wrapped with the link's name.

use thiserror::Error;
use trgraph_core::CodecError;

/// Side of a link at which a value was checked against a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The value entering the link failed the input node's predicate.
    Input,
    /// The value produced by the link failed the output node's predicate.
    Output,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// What kind of definition a registration names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition {
    Node,
    Link,
}

impl std::fmt::Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Link => f.write_str("link"),
        }
    }
}

/// Error raised by a [`crate::Graph`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A chain names a link that is not registered.
    #[error("link {0:?} is not registered")]
    UnknownLink(String),

    /// A link declares an input or output node that is not registered.
    #[error("link {link:?} references unregistered node {node:?}")]
    UnknownNode {
        /// The missing node name.
        node: String,
        /// The link that declares it.
        link: String,
    },

    /// A value failed a node's predicate.
    #[error("link {link:?}: {stage} value {value} is not a valid {node}")]
    TypeMismatch {
        /// Whether the value was entering or leaving the link.
        stage: Stage,
        /// The node whose predicate rejected the value.
        node: String,
        /// The link being executed.
        link: String,
        /// Rendering of the rejected value.
        value: String,
    },

    /// A link's transform failed.
    #[error("link {link:?} failed: {source}")]
    Transform {
        /// The link being executed.
        link: String,
        /// The codec failure.
        #[source]
        source: CodecError,
    },

    /// `extend` named a node or link that already exists.
    #[error("{kind} {name:?} is already registered")]
    DuplicateDefinition {
        /// Node or link.
        kind: Definition,
        /// The conflicting name.
        name: String,
    },

    /// A schema path has no value in the transformed object.
    #[error("object has no value at path {path:?}")]
    PathMissing {
        /// Dotted path of the missing value.
        path: String,
    },

    /// A chain with no links was supplied.
    #[error("chain is empty")]
    EmptyChain,

    /// A schema does not have the shape of a schema tree.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
}

impl GraphError {
    /// The wrapped codec error, if this is a transform failure.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            Self::Transform { source, .. } => Some(source),
            _ => None,
        }
    }
}
