//! # trgraph-cli — Transformation Graph Command-Line Interface
//!
//! A clap-based front end over the `trgraph` engine. Each subcommand parses
//! its arguments, builds a [`trgraph::Graph`] seeded with the built-in
//! catalogue and prints its result as JSON (or as generated Rust source).
//!
//! ## Subcommands
//!
//! - `links` — list every registered link name, or emit them as a Rust
//!   constant for code that wants a compile-time list
//! - `transform` — run a chain of links over a single literal
//! - `object` — run a schema over a JSON or YAML document
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; handlers return
//!   rendered output so they can be tested without capturing stdout.
//! - No transformation logic lives here; everything goes through `trgraph`.

pub mod input;
pub mod links;
pub mod object;
pub mod transform;

use serde::Serialize;

/// Render `value` as JSON, indented when `pretty` is set.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
