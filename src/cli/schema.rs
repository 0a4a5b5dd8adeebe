//! Schema command handler.
//!
//! Implements the `schema` subcommand: prints the inferred schema of any
//! JSON document, recognized or not.

use super::CommandContext;
use crate::config::OutputFormat;
use crate::parsers::try_read_value;
use crate::pipeline::{exit_codes, read_sbom_file, to_json, write_output};
use crate::schema::{infer, RenderHint, SchemaNode};
use anyhow::Result;
use std::fmt::{self, Write as _};
use std::path::Path;

/// Run the schema command
pub fn run_schema(sbom_path: &Path, ctx: &CommandContext) -> Result<i32> {
    let loaded = read_sbom_file(sbom_path, &ctx.config.limits)?;

    let value = match try_read_value(&loaded.content) {
        Ok(value) => value,
        Err(e) => {
            let message = format!("{}: {e}", loaded.file_name());
            write_output(&ctx.palette().error(&message), &ctx.target(), ctx.quiet)?;
            return Ok(exit_codes::INVALID);
        }
    };

    let schema = infer(&value);
    let content = match ctx.config.output.format {
        OutputFormat::Json => to_json(&schema, ctx.config.output.pretty)?,
        OutputFormat::Text => render_schema(&schema)?.trim_end().to_string(),
    };
    write_output(&content, &ctx.target(), ctx.quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Render a schema tree as an indented outline.
pub(crate) fn render_schema(schema: &SchemaNode) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render_node(&mut out, schema, 0)?;
    Ok(out)
}

fn render_node(out: &mut String, node: &SchemaNode, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    write!(
        out,
        "{indent}{} <{}> \"{}\"",
        node.property_name, node.node_type, node.title
    )?;
    if node.render_hint != RenderHint::Auto {
        write!(out, " [{}]", node.render_hint)?;
    }
    out.push('\n');

    for child in node.children() {
        render_node(out, child, depth + 1)?;
    }
    if let Some(item) = &node.item_schema {
        render_node(out, item, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_schema_outline() {
        let schema = infer(&json!({
            "bomFormat": "CycloneDX",
            "components": [{"name": "a"}],
            "dependencies": []
        }));
        let text = render_schema(&schema).expect("render");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "root <object> \"root\"",
                "  bomFormat <string> \"Bom Format\" [key-value]",
                "  components <array> \"Components\" [searchable-list]",
                "    item <object> \"item\"",
                "      name <string> \"Name\"",
                "  dependencies <array> \"Dependencies\" [accordion]",
            ]
        );
    }
}
