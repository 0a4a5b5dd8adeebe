//! Parser trait definitions and error types.
//!
//! This module defines the `SbomParser` trait implemented by the typed
//! CycloneDX and SPDX parsers. Both share the same flow: read the text
//! leniently, classify it with the format detector, check the fields the
//! typed model cannot do without, then map the value tree onto the model.

use super::detection::{detect_value, SbomDialect};
use super::lenient;
use serde_json::Value;
use thiserror::Error;

/// Reasons a document could not be turned into a typed model.
///
/// The public parse functions collapse all of these into an absent result;
/// the variants exist for logging and for the command-line front end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input is empty")]
    Blank,

    #[error("JSON parse error: {0}")]
    Json(String),

    #[error("Unknown SBOM format: expected CycloneDX or SPDX markers")]
    UnknownFormat,

    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(String),

    #[error("Expected {expected} document, found {found}")]
    DialectMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid SBOM structure: {0}")]
    InvalidStructure(String),
}

/// Trait for typed SBOM parsers.
///
/// Implementors provide the dialects they accept and the mapping from an
/// already classified value tree. Reading, classification and the
/// absent-on-failure surface are shared.
pub trait SbomParser {
    /// Typed document produced by this parser
    type Document;

    /// Get format name
    fn format_name(&self) -> &'static str;

    /// Dialects this parser produces a typed model for
    fn supported_dialects(&self) -> &'static [SbomDialect];

    /// Map a value tree onto the typed model.
    fn parse_value(&self, value: &Value) -> Result<Self::Document, ParseError>;

    /// Parse from raw text, reporting why parsing failed.
    fn parse_str(&self, content: &str) -> Result<Self::Document, ParseError> {
        let value = lenient::try_read_value(content)?;
        self.parse_value(&value)
    }

    /// Parse from raw text; any failure yields `None`.
    fn parse(&self, content: &str) -> Option<Self::Document> {
        match self.parse_str(content) {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::debug!("{} parse failed: {}", self.format_name(), e);
                None
            }
        }
    }

    /// Classify the value tree and accept only this parser's dialects.
    fn classify(&self, value: &Value) -> Result<SbomDialect, ParseError> {
        let detection = detect_value(value);
        match detection.dialect {
            Some(dialect) if self.supported_dialects().contains(&dialect) => Ok(dialect),
            Some(dialect) => Err(ParseError::DialectMismatch {
                expected: self.format_name(),
                found: dialect.label().to_string(),
            }),
            None if detection.is_unsupported_version => Err(ParseError::UnsupportedVersion(
                detection.detected_label.unwrap_or_default(),
            )),
            None => Err(ParseError::UnknownFormat),
        }
    }
}
