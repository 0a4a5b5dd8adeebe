//! Formats command handler: lists the supported dialects.

use super::CommandContext;
use crate::config::OutputFormat;
use crate::parsers::{SbomDialect, SUPPORTED_VERSIONS};
use crate::pipeline::{exit_codes, to_json, write_output};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormatInfo {
    dialect: SbomDialect,
    label: &'static str,
    family: &'static str,
    spec_version: &'static str,
}

/// Run the formats command
pub fn run_formats(ctx: &CommandContext) -> Result<i32> {
    let content = match ctx.config.output.format {
        OutputFormat::Json => {
            let formats: Vec<FormatInfo> = SbomDialect::ALL
                .iter()
                .map(|&dialect| FormatInfo {
                    dialect,
                    label: dialect.label(),
                    family: dialect.family().name(),
                    spec_version: dialect.spec_version(),
                })
                .collect();
            to_json(&formats, ctx.config.output.pretty)?
        }
        OutputFormat::Text => SUPPORTED_VERSIONS.join("\n"),
    };
    write_output(&content, &ctx.target(), ctx.quiet)?;
    Ok(exit_codes::SUCCESS)
}
