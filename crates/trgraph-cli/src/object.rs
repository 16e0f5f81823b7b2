//! # Object Subcommand
//!
//! Applies a schema to a document and prints
//! `{"transformed": ..., "linear": [...]}`.
//!
//! ```bash
//! trgraph object --schema schema.yaml document.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use trgraph::{Graph, Object, Schema, TransformResult};

use crate::input::load_document;

/// Arguments for the object subcommand.
#[derive(Args, Debug)]
pub struct ObjectArgs {
    /// Schema file (JSON or YAML).
    #[arg(long)]
    pub schema: PathBuf,

    /// Document file (JSON or YAML).
    pub document: PathBuf,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the object subcommand.
pub fn run_object(args: &ObjectArgs) -> Result<u8> {
    let result = transform_files(&Graph::new(), args)?;
    println!("{}", crate::render_json(&result, args.pretty)?);
    Ok(0)
}

/// Load the schema and document named in `args` and transform.
pub fn transform_files(graph: &Graph, args: &ObjectArgs) -> Result<TransformResult> {
    let schema = Schema::try_from(&load_document(&args.schema)?)
        .with_context(|| format!("invalid schema: {}", args.schema.display()))?;
    let document = Object::from(&load_document(&args.document)?);
    tracing::info!(
        schema = %args.schema.display(),
        document = %args.document.display(),
        leaves = schema.chains().len(),
        "transforming document"
    );
    Ok(graph.object_transform(&document, &schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file(suffix: &str, content: &str) -> NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn yaml_schema_over_json_document() {
        let schema = file(".yaml", "name: [utf8-bytes, bytes-uint256]\nflag: [boolean-uint]\n");
        let document = file(".json", r#"{"name": "Test", "flag": true}"#);
        let args = ObjectArgs {
            schema: schema.path().to_path_buf(),
            document: document.path().to_path_buf(),
            pretty: false,
        };
        let result = transform_files(&Graph::new(), &args).unwrap();
        assert_eq!(
            crate::render_json(&result, false).unwrap(),
            r#"{"transformed":{"name":1415934836,"flag":1},"linear":[1415934836,1]}"#
        );
    }

    #[test]
    fn scalar_schema_is_rejected() {
        let schema = file(".json", "5");
        let document = file(".json", "{}");
        let args = ObjectArgs {
            schema: schema.path().to_path_buf(),
            document: document.path().to_path_buf(),
            pretty: false,
        };
        let err = transform_files(&Graph::new(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid schema"));
    }
}
