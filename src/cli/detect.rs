//! Detect command handler.
//!
//! Implements the `detect` subcommand: reports the dialect of each file.

use super::{column_width, pad, CommandContext, Palette};
use crate::config::OutputFormat;
use crate::error::SbomViewerError;
use crate::parsers::{detect, DetectionResult};
use crate::pipeline::{exit_codes, read_sbom_file, to_json, write_output};
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// Detection outcome for one file
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileDetection {
    path: PathBuf,
    #[serde(flatten)]
    detection: Option<DetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileDetection {
    fn from_result(path: PathBuf, result: Result<DetectionResult, SbomViewerError>) -> Self {
        match result {
            Ok(detection) => Self {
                path,
                detection: Some(detection),
                error: None,
            },
            Err(e) => Self {
                path,
                detection: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn exit_code(&self) -> i32 {
        match &self.detection {
            Some(d) if d.dialect.is_some() => exit_codes::SUCCESS,
            Some(_) => exit_codes::INVALID,
            None => exit_codes::ERROR,
        }
    }
}

/// Run the detect command over one or more files.
///
/// Files are read and classified in parallel; output keeps argument order.
pub fn run_detect(paths: &[PathBuf], ctx: &CommandContext) -> Result<i32> {
    let limits = &ctx.config.limits;
    let results: Vec<FileDetection> = paths
        .par_iter()
        .map(|path| {
            let detection = read_sbom_file(path, limits).map(|loaded| detect(&loaded.content));
            FileDetection::from_result(path.clone(), detection)
        })
        .collect();

    let content = match ctx.config.output.format {
        OutputFormat::Json => to_json(&results, ctx.config.output.pretty)?,
        OutputFormat::Text => render_text(&results, ctx.palette()),
    };
    write_output(&content, &ctx.target(), ctx.quiet)?;

    Ok(results
        .iter()
        .map(FileDetection::exit_code)
        .max()
        .unwrap_or(exit_codes::SUCCESS))
}

fn render_text(results: &[FileDetection], palette: Palette) -> String {
    let names: Vec<String> = results
        .iter()
        .map(|r| r.path.display().to_string())
        .collect();
    let width = column_width(names.iter().map(String::as_str));

    names
        .iter()
        .zip(results)
        .map(|(name, result)| {
            let status = match (&result.detection, &result.error) {
                (Some(d), _) if d.dialect.is_some() => palette.ok(&d.status_message()),
                (Some(d), _) if d.is_unsupported_version => palette.warn(&d.status_message()),
                (Some(d), _) => palette.error(&d.status_message()),
                (None, Some(e)) => palette.error(e),
                (None, None) => String::new(),
            };
            format!("{}  {status}", pad(name, width))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
