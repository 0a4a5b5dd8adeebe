//! CycloneDX SBOM parser.
//!
//! Supports CycloneDX versions 1.6 and 1.7 in JSON.

use crate::model::CycloneDxDocument;
use crate::parsers::detection::SbomDialect;
use crate::parsers::traits::{ParseError, SbomParser};
use serde::Deserialize;
use serde_json::Value;

/// Parser for CycloneDX SBOM format
#[derive(Debug, Clone, Copy, Default)]
pub struct CycloneDxParser;

impl CycloneDxParser {
    /// Create a new CycloneDX parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SbomParser for CycloneDxParser {
    type Document = CycloneDxDocument;

    fn format_name(&self) -> &'static str {
        "CycloneDX"
    }

    fn supported_dialects(&self) -> &'static [SbomDialect] {
        &[SbomDialect::CycloneDx1_6, SbomDialect::CycloneDx1_7]
    }

    fn parse_value(&self, value: &Value) -> Result<CycloneDxDocument, ParseError> {
        let dialect = self.classify(value)?;

        // `components` may be absent; a document without metadata is not a BOM
        if !value.get("metadata").is_some_and(Value::is_object) {
            return Err(ParseError::MissingField("metadata".to_string()));
        }

        let document = CycloneDxDocument::deserialize(value)
            .map_err(|e| ParseError::InvalidStructure(e.to_string()))?;

        tracing::debug!(
            "Parsed {} document with {} components",
            dialect,
            document.components.len()
        );
        Ok(document)
    }
}
