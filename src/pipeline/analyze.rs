//! Single-pass analysis of an SBOM text.
//!
//! The text is read once; detection, validation, typed parsing and schema
//! inference all work on that same value tree.

use super::exit_codes;
use crate::model::SbomDocument;
use crate::parsers::{
    detect_value, parse_document, try_read_value, DetectionResult, ParseError, ValidationReport,
};
use crate::schema::{infer, SchemaNode};
use serde::Serialize;

/// Everything the viewer knows about one document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub detection: DetectionResult,
    /// Missing required fields, for supported dialects only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<SbomDocument>,
    /// Why no typed document exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
    pub schema: SchemaNode,
}

impl Analysis {
    /// Whether a typed document was produced.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.document.is_some()
    }

    /// Process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.document.is_some() {
            exit_codes::SUCCESS
        } else {
            exit_codes::INVALID
        }
    }
}

/// Analyze raw SBOM text.
///
/// Fails only when the text cannot be read as (lenient) JSON. Every later
/// problem is recorded in the returned [`Analysis`].
pub fn analyze(text: &str) -> Result<Analysis, ParseError> {
    let value = try_read_value(text)?;
    let detection = detect_value(&value);

    let validation = detection
        .dialect
        .map(|dialect| ValidationReport::check(&value, dialect).missing);

    let (document, parse_error) = match parse_document(&value) {
        Ok(document) => (Some(document), None),
        Err(e) => (None, Some(e.to_string())),
    };

    let schema = infer(&value);

    tracing::debug!(
        "Analysis: {}, parsed={}",
        detection.status_message(),
        document.is_some()
    );

    Ok(Analysis {
        detection,
        validation,
        document,
        parse_error,
        schema,
    })
}
