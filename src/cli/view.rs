//! View command handler.
//!
//! Implements the `view` subcommand for viewing a single SBOM. Documents
//! that have a typed model are summarized from it; anything else falls back
//! to the inferred schema.

use super::schema::render_schema;
use super::{column_width, pad, CommandContext, Palette};
use crate::config::{DisplayConfig, OutputFormat};
use crate::model::{CycloneDxDocument, SbomDocument, SpdxDocument};
use crate::pipeline::{analyze, exit_codes, read_sbom_file, to_json, write_output, Analysis};
use crate::state::SbomState;
use anyhow::Result;
use std::fmt::{self, Write as _};
use std::path::Path;

/// Run the view command
pub fn run_view(sbom_path: &Path, ctx: &CommandContext) -> Result<i32> {
    let loaded = read_sbom_file(sbom_path, &ctx.config.limits)?;
    let palette = ctx.palette();

    let analysis = match analyze(&loaded.content) {
        Ok(analysis) => analysis,
        Err(e) => {
            let message = format!("{}: {e}", loaded.file_name());
            write_output(&palette.error(&message), &ctx.target(), ctx.quiet)?;
            return Ok(exit_codes::INVALID);
        }
    };

    let mut state = SbomState::new();
    state.subscribe(|| tracing::debug!("Displayed SBOM replaced"));
    state.set_file_name(loaded.file_name());
    if let Some(document) = analysis.document.clone() {
        state.set_document(document);
    }

    let content = match ctx.config.output.format {
        OutputFormat::Json => to_json(&analysis, ctx.config.output.pretty)?,
        OutputFormat::Text => render_text(&state, &analysis, &ctx.config.display, palette)?,
    };
    write_output(&content, &ctx.target(), ctx.quiet)?;

    Ok(analysis.exit_code())
}

fn render_text(
    state: &SbomState,
    analysis: &Analysis,
    display: &DisplayConfig,
    palette: Palette,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let status = analysis.detection.status_message();

    writeln!(out, "{}", palette.bold(state.file_name().unwrap_or("<input>")))?;
    writeln!(
        out,
        "{}",
        if analysis.is_parsed() {
            palette.ok(&status)
        } else if analysis.detection.is_recognized() {
            palette.warn(&status)
        } else {
            palette.error(&status)
        }
    )?;

    match state.document() {
        Some(SbomDocument::CycloneDx(doc)) => render_cyclonedx(&mut out, doc, display)?,
        Some(SbomDocument::Spdx(doc)) => render_spdx(&mut out, doc, display)?,
        None => {
            if let Some(error) = &analysis.parse_error {
                writeln!(out, "{}", palette.error(error))?;
            }
            writeln!(out)?;
            out.push_str(&render_schema(&analysis.schema)?);
        }
    }

    if display.show_schema && state.document().is_some() {
        writeln!(out)?;
        out.push_str(&render_schema(&analysis.schema)?);
    }

    Ok(out.trim_end().to_string())
}

fn render_cyclonedx(
    out: &mut String,
    doc: &CycloneDxDocument,
    display: &DisplayConfig,
) -> fmt::Result {
    let metadata = doc.metadata.as_ref();
    let name = metadata
        .and_then(|m| m.component.as_ref())
        .map_or("-", |c| c.name.as_str());

    writeln!(out, "Name:         {name}")?;
    if let Some(serial) = &doc.serial_number {
        writeln!(out, "Serial:       {serial}")?;
    }
    writeln!(out, "Version:      {}", doc.version)?;
    if let Some(created) = doc.created_at() {
        writeln!(out, "Created:      {}", created.to_rfc3339())?;
    }
    if let Some(tools) = metadata.map(|m| &m.tools).filter(|t| !t.is_empty()) {
        let names: Vec<&str> = tools.iter().filter_map(|t| t.name.as_deref()).collect();
        writeln!(out, "Tools:        {}", names.join(", "))?;
    }
    if let Some(phases) = metadata.and_then(|m| m.lifecycles.as_ref()) {
        let names: Vec<&str> = phases.iter().filter_map(|l| l.phase.as_deref()).collect();
        writeln!(out, "Lifecycles:   {}", names.join(", "))?;
    }

    let rows: Vec<[String; 3]> = doc
        .components
        .iter()
        .map(|c| {
            [
                c.name.clone(),
                c.version.clone().unwrap_or_default(),
                c.license_ids().collect::<Vec<_>>().join(", "),
            ]
        })
        .collect();
    render_table(out, "Components", ["NAME", "VERSION", "LICENSES"], &rows, display)?;

    writeln!(out, "Dependencies: {}", doc.dependencies.len())?;
    if let Some(formulation) = &doc.formulation {
        writeln!(out, "Formulas:     {}", formulation.len())?;
    }
    if let Some(standards) = doc.definitions.as_ref().and_then(|d| d.standards.as_ref()) {
        writeln!(out, "Standards:    {}", standards.len())?;
    }
    if let Some(claims) = doc.declarations.as_ref().and_then(|d| d.claims.as_ref()) {
        writeln!(out, "Claims:       {}", claims.len())?;
    }
    Ok(())
}

fn render_spdx(out: &mut String, doc: &SpdxDocument, display: &DisplayConfig) -> fmt::Result {
    writeln!(out, "Name:          {}", doc.name)?;
    if !doc.document_namespace.is_empty() {
        writeln!(out, "Namespace:     {}", doc.document_namespace)?;
    }
    if !doc.data_license.is_empty() {
        writeln!(out, "Data license:  {}", doc.data_license)?;
    }
    match doc.created_at() {
        Some(created) => {
            writeln!(out, "Created:       {}", created.to_rfc3339())?;
        }
        None if !doc.creation_info.created.is_empty() => {
            writeln!(out, "Created:       {}", doc.creation_info.created)?;
        }
        None => {}
    }
    if !doc.creation_info.creators.is_empty() {
        writeln!(out, "Creators:      {}", doc.creation_info.creators.join(", "))?;
    }

    let rows: Vec<[String; 3]> = doc
        .packages
        .iter()
        .map(|p| {
            [
                p.name.clone(),
                p.version_info.clone().unwrap_or_default(),
                p.license_concluded
                    .clone()
                    .or_else(|| p.license_declared.clone())
                    .unwrap_or_default(),
            ]
        })
        .collect();
    render_table(out, "Packages", ["NAME", "VERSION", "LICENSE"], &rows, display)?;

    writeln!(out, "Relationships: {}", doc.relationships.len())
}

fn render_table(
    out: &mut String,
    title: &str,
    headers: [&str; 3],
    rows: &[[String; 3]],
    display: &DisplayConfig,
) -> fmt::Result {
    writeln!(out, "{title} ({}):", rows.len())?;
    if rows.is_empty() {
        return Ok(());
    }

    let shown = &rows[..rows.len().min(display.max_components)];
    let widths: Vec<usize> = (0..2)
        .map(|col| {
            column_width(
                std::iter::once(headers[col]).chain(shown.iter().map(|r| r[col].as_str())),
            )
        })
        .collect();

    writeln!(
        out,
        "  {}  {}  {}",
        pad(headers[0], widths[0]),
        pad(headers[1], widths[1]),
        headers[2]
    )?;
    for row in shown {
        let line = format!(
            "  {}  {}  {}",
            pad(&row[0], widths[0]),
            pad(&row[1], widths[1]),
            row[2]
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    if rows.len() > shown.len() {
        writeln!(out, "  ... and {} more", rows.len() - shown.len())?;
    }
    Ok(())
}
