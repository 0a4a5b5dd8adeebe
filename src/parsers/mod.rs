//! SBOM readers, format detection, validation and typed parsers.
//!
//! Raw text is read once by the lenient JSON reader into a
//! `serde_json::Value`. That tree feeds the format detector, the structural
//! validator and the typed parsers, and (outside this module) schema
//! inference.
//!
//! Every operation here reports failure as an absent result; the
//! `Result`-returning variants (`try_read_value`, [`SbomParser::parse_str`])
//! exist for callers that want to explain why.
//!
//! ## Usage
//!
//! ```
//! use sbom_viewer::parsers::{detect, parse_cyclonedx, SbomDialect};
//!
//! let text = r#"{
//!     // produced by hand
//!     "bomFormat": "CycloneDX",
//!     "specVersion": "1.7",
//!     "version": 1,
//!     "metadata": {},
//! }"#;
//!
//! assert_eq!(detect(text).dialect, Some(SbomDialect::CycloneDx1_7));
//! let bom = parse_cyclonedx(text).expect("valid CycloneDX");
//! assert_eq!(bom.spec_version, "1.7");
//! ```

mod cyclonedx;
mod detection;
pub mod lenient;
mod spdx;
mod traits;
mod validation;

pub use cyclonedx::CycloneDxParser;
pub use detection::{
    detect, detect_value, DetectionResult, SbomDialect, SbomFamily, SUPPORTED_VERSIONS,
};
pub use lenient::{read_value, try_read_value};
pub use spdx::SpdxParser;
pub use traits::{ParseError, SbomParser};
pub use validation::{missing_fields, validate, ValidationReport};

use crate::model::{CycloneDxDocument, SbomDocument, SpdxDocument};
use serde_json::Value;

/// Parse CycloneDX 1.6/1.7 text; any failure yields `None`.
#[must_use]
pub fn parse_cyclonedx(text: &str) -> Option<CycloneDxDocument> {
    CycloneDxParser::new().parse(text)
}

/// Parse SPDX 2.2 text; any failure yields `None`.
#[must_use]
pub fn parse_spdx(text: &str) -> Option<SpdxDocument> {
    SpdxParser::new().parse(text)
}

/// Map an already-read value tree onto the typed model of its dialect.
pub fn parse_document(value: &Value) -> Result<SbomDocument, ParseError> {
    let detection = detect_value(value);
    match detection.dialect.map(|d| d.family()) {
        Some(SbomFamily::CycloneDx) => CycloneDxParser::new()
            .parse_value(value)
            .map(SbomDocument::from),
        Some(SbomFamily::Spdx) => SpdxParser::new().parse_value(value).map(SbomDocument::from),
        None if detection.is_unsupported_version => Err(ParseError::UnsupportedVersion(
            detection.detected_label.unwrap_or_default(),
        )),
        None => Err(ParseError::UnknownFormat),
    }
}
