//! # Transform Subcommand
//!
//! Runs one chain of links over a single literal and prints the result.
//!
//! ```bash
//! trgraph transform --chain utf8-bytes,bytes-uint256 Test
//! trgraph transform --chain uint32-bytes --hex 513
//! ```

use anyhow::{Context, Result};
use clap::Args;
use trgraph::{Graph, Value};
use trgraph_core::encoding;

use crate::input::parse_literal;

/// Arguments for the transform subcommand.
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Comma-separated link names, applied left to right.
    #[arg(long, value_delimiter = ',', required = true)]
    pub chain: Vec<String>,

    /// Take the literal as a plain string instead of parsing it as JSON.
    #[arg(long)]
    pub text: bool,

    /// Print a byte result as a `0x`-prefixed hex string.
    #[arg(long)]
    pub hex: bool,

    /// Input value.
    pub literal: String,
}

/// Execute the transform subcommand.
pub fn run_transform(args: &TransformArgs) -> Result<u8> {
    println!("{}", transform_literal(&Graph::new(), args)?);
    Ok(0)
}

/// Run the chain in `args` over its literal and render the result.
pub fn transform_literal(graph: &Graph, args: &TransformArgs) -> Result<String> {
    let input = parse_literal(&args.literal, args.text)?;
    tracing::debug!(chain = %args.chain.join(","), input = %input, "running chain");
    let output = graph
        .transform(input, args.chain.as_slice())
        .with_context(|| format!("chain {} failed", args.chain.join(",")))?;
    match output {
        Value::Bytes(bytes) if args.hex => Ok(encoding::bytes_to_prefixed_hex(&bytes)),
        other => crate::render_json(&other, false),
    }
}
