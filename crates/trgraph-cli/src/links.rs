//! # Links Subcommand
//!
//! Lists the names of every registered link. The `rust` format emits a
//! constant that downstream code can include to get a compile-time list of
//! valid link names.
//!
//! ```bash
//! trgraph links --format rust > src/graph_links.rs
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use trgraph::Graph;

/// Output formats for the link list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LinkFormat {
    /// One name per line.
    #[default]
    Plain,
    /// A JSON array of names.
    Json,
    /// `pub const GRAPH_LINKS: &[&str] = &[...];`
    Rust,
}

/// Arguments for the links subcommand.
#[derive(Args, Debug)]
pub struct LinksArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = LinkFormat::Plain)]
    pub format: LinkFormat,

    /// List node names instead of link names.
    #[arg(long)]
    pub nodes: bool,
}

/// Execute the links subcommand.
pub fn run_links(args: &LinksArgs) -> Result<u8> {
    let graph = Graph::new();
    let names: Vec<&str> = if args.nodes {
        graph.node_names().collect()
    } else {
        graph.link_names().collect()
    };
    tracing::debug!(count = names.len(), nodes = args.nodes, "listing registry names");
    print!("{}", render_names(&names, args.format, args.nodes)?);
    Ok(0)
}

/// Render `names` in `format`. Output always ends with a newline.
pub fn render_names(names: &[&str], format: LinkFormat, nodes: bool) -> Result<String> {
    let rendered: String = match format {
        LinkFormat::Plain => names.iter().map(|n| format!("{n}\n")).collect(),
        LinkFormat::Json => format!("{}\n", crate::render_json(&names, true)?),
        LinkFormat::Rust => {
            let constant = if nodes { "GRAPH_NODES" } else { "GRAPH_LINKS" };
            let mut out = format!("pub const {constant}: &[&str] = &[\n");
            for name in names {
                out.push_str(&format!("    {name:?},\n"));
            }
            out.push_str("];\n");
            out
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_one_name_per_line() {
        let out = render_names(&["a-b", "b-c"], LinkFormat::Plain, false).unwrap();
        assert_eq!(out, "a-b\nb-c\n");
    }

    #[test]
    fn json_is_an_array() {
        let out = render_names(&["a-b", "b-c"], LinkFormat::Json, false).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, ["a-b", "b-c"]);
    }

    #[test]
    fn rust_emits_a_constant() {
        let out = render_names(&["0xhex-bytes", "mod.uint16"], LinkFormat::Rust, false).unwrap();
        assert_eq!(
            out,
            "pub const GRAPH_LINKS: &[&str] = &[\n    \"0xhex-bytes\",\n    \"mod.uint16\",\n];\n"
        );
    }

    #[test]
    fn node_constant_is_named_for_nodes() {
        let out = render_names(&["bytes"], LinkFormat::Rust, true).unwrap();
        assert!(out.starts_with("pub const GRAPH_NODES"));
    }

    #[test]
    fn builtin_link_list_contains_known_links() {
        let graph = Graph::new();
        let names: Vec<&str> = graph.link_names().collect();
        let out = render_names(&names, LinkFormat::Plain, false).unwrap();
        for link in ["utf8-bytes", "bytes-uint256", "isodate-bytesdate", "mod.uint64"] {
            assert!(out.lines().any(|l| l == link), "{link} missing");
        }
    }
}
