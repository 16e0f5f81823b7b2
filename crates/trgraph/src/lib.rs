//! # trgraph — Typed Transformation Graph
//!
//! A registry of named value kinds ("nodes") and named conversions between
//! them ("links"), executed as explicit chains and drivable over nested
//! documents through a schema that mirrors their shape. It canonicalizes
//! application values (text in many encodings, fixed and arbitrary width
//! integers, floats, booleans, dates, country codes) into byte or numeric
//! forms fit for hashing, storage keys and wire encoding.
//!
//! ```
//! use trgraph::{Graph, Value};
//!
//! let graph = Graph::new();
//! let n = graph.transform(Value::from("Test"), &["utf8-bytes", "bytes-uint256"])?;
//! assert_eq!(n, Value::from(1_415_934_836i64));
//! # Ok::<(), trgraph::GraphError>(())
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Both ends of every link are checked.** A value enters a link only if
//!    the input node admits it and leaves only if the output node admits the
//!    result, on every step of a chain.
//!
//! 2. **Append-only registration.** `extend` never overwrites a node or
//!    link; a duplicate name is an error.
//!
//! 3. **No shared mutable state.** Each `Graph` owns its registries, cloned
//!    from the built-in catalogue.
//!
//! 4. **Byte layouts are a contract.** Big-endian unsigned integers, the
//!    offset-signed encoding and the packed date layout are produced by
//!    `trgraph-core` and must not change.
//!
//! ## Crate Policy
//!
//! - No I/O: every operation is a pure, synchronous function of the graph
//!   and its input.
//! - No `.unwrap()` outside tests.

pub mod builtins;
pub mod error;
pub mod graph;
pub mod link;
pub mod node;
pub mod object;
pub mod schema;
pub mod traversal;

// Re-export primary types for ergonomic imports.
pub use error::{Definition, GraphError, Stage};
pub use graph::Graph;
pub use link::Link;
pub use node::Node;
pub use object::Object;
pub use schema::Schema;
pub use traversal::TransformResult;
pub use trgraph_core::{CodecError, Value};
