//! SPDX SBOM parser.
//!
//! Supports SPDX 2.2 in JSON.

use crate::model::SpdxDocument;
use crate::parsers::detection::SbomDialect;
use crate::parsers::traits::{ParseError, SbomParser};
use serde::Deserialize;
use serde_json::Value;

/// Parser for SPDX SBOM format
#[derive(Debug, Clone, Copy, Default)]
pub struct SpdxParser;

impl SpdxParser {
    /// Create a new SPDX parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SbomParser for SpdxParser {
    type Document = SpdxDocument;

    fn format_name(&self) -> &'static str {
        "SPDX"
    }

    fn supported_dialects(&self) -> &'static [SbomDialect] {
        &[SbomDialect::Spdx2_2]
    }

    fn parse_value(&self, value: &Value) -> Result<SpdxDocument, ParseError> {
        self.classify(value)?;

        if value.get("name").is_none() {
            return Err(ParseError::MissingField("name".to_string()));
        }
        if !value.get("creationInfo").is_some_and(Value::is_object) {
            return Err(ParseError::MissingField("creationInfo".to_string()));
        }

        let document = SpdxDocument::deserialize(value)
            .map_err(|e| ParseError::InvalidStructure(e.to_string()))?;

        tracing::debug!(
            "Parsed SPDX document '{}' with {} packages",
            document.name,
            document.packages.len()
        );
        Ok(document)
    }
}
