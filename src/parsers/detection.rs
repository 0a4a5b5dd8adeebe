//! SBOM dialect and version detection.
//!
//! Detection looks only at the top-level markers of a document:
//! `bomFormat`/`specVersion` for CycloneDX and `spdxVersion` for SPDX.
//! A document of a recognized dialect whose version is outside the
//! supported set is reported as a distinct outcome carrying a label, so
//! callers can tell "not an SBOM" apart from "an SBOM we cannot read".

use super::lenient;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Human-readable list of the dialects a typed model exists for.
pub const SUPPORTED_VERSIONS: [&str; 3] = ["CycloneDX 1.6", "CycloneDX 1.7", "SPDX 2.2"];

const SUPPORTED_CYCLONEDX_VERSIONS: &[&str] = &["1.6", "1.7"];
const SUPPORTED_SPDX_VERSIONS: &[&str] = &["SPDX-2.2"];

/// Supported (dialect, version) pairs.
///
/// The set is closed: adding a dialect means adding a variant here and a
/// typed parser for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SbomDialect {
    #[serde(rename = "CycloneDX_1_6")]
    CycloneDx1_6,
    #[serde(rename = "CycloneDX_1_7")]
    CycloneDx1_7,
    #[serde(rename = "SPDX_2_2")]
    Spdx2_2,
}

/// Dialect family, independent of version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SbomFamily {
    CycloneDx,
    Spdx,
}

impl SbomFamily {
    /// Get the human-readable name for this family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CycloneDx => "CycloneDX",
            Self::Spdx => "SPDX",
        }
    }
}

impl fmt::Display for SbomFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SbomDialect {
    /// All supported dialects, in the order of [`SUPPORTED_VERSIONS`].
    pub const ALL: [Self; 3] = [Self::CycloneDx1_6, Self::CycloneDx1_7, Self::Spdx2_2];

    /// Display label, e.g. `"CycloneDX 1.6"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CycloneDx1_6 => "CycloneDX 1.6",
            Self::CycloneDx1_7 => "CycloneDX 1.7",
            Self::Spdx2_2 => "SPDX 2.2",
        }
    }

    /// Dialect family.
    #[must_use]
    pub const fn family(&self) -> SbomFamily {
        match self {
            Self::CycloneDx1_6 | Self::CycloneDx1_7 => SbomFamily::CycloneDx,
            Self::Spdx2_2 => SbomFamily::Spdx,
        }
    }

    /// Version string as written in the document.
    #[must_use]
    pub const fn spec_version(&self) -> &'static str {
        match self {
            Self::CycloneDx1_6 => "1.6",
            Self::CycloneDx1_7 => "1.7",
            Self::Spdx2_2 => "SPDX-2.2",
        }
    }
}

impl fmt::Display for SbomDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of dialect detection.
///
/// `is_unsupported_version` implies `dialect` is `None` and
/// `detected_label` names what was found; a present `dialect` implies the
/// version is supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Supported dialect, if recognized
    pub dialect: Option<SbomDialect>,
    /// Human-readable "Dialect Version" label
    pub detected_label: Option<String>,
    /// Recognized dialect with a version outside the supported set
    pub is_unsupported_version: bool,
}

impl DetectionResult {
    /// Result for blank, malformed or unrecognized input.
    #[must_use]
    pub const fn unrecognized() -> Self {
        Self {
            dialect: None,
            detected_label: None,
            is_unsupported_version: false,
        }
    }

    /// Result for a supported dialect.
    #[must_use]
    pub fn supported(dialect: SbomDialect) -> Self {
        Self {
            dialect: Some(dialect),
            detected_label: Some(dialect.label().to_string()),
            is_unsupported_version: false,
        }
    }

    /// Result for a recognized dialect with an unsupported version.
    #[must_use]
    pub fn unsupported(label: impl Into<String>) -> Self {
        Self {
            dialect: None,
            detected_label: Some(label.into()),
            is_unsupported_version: true,
        }
    }

    /// Whether any dialect marker was found, supported or not.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        self.dialect.is_some() || self.is_unsupported_version
    }

    /// One-line status suitable for showing to a user.
    #[must_use]
    pub fn status_message(&self) -> String {
        match (&self.dialect, &self.detected_label) {
            (Some(dialect), _) => format!("Detected {dialect}"),
            (None, Some(label)) if self.is_unsupported_version => format!(
                "Recognized but unsupported version {label} (supported: {})",
                SUPPORTED_VERSIONS.join(", ")
            ),
            _ => "Not a recognized SBOM".to_string(),
        }
    }
}

/// Detect the dialect of raw SBOM text.
///
/// Blank and malformed input are unrecognized; no error escapes.
#[must_use]
pub fn detect(text: &str) -> DetectionResult {
    if lenient::is_blank(text) {
        return DetectionResult::unrecognized();
    }

    match lenient::read_value(text) {
        Some(value) => detect_value(&value),
        None => DetectionResult::unrecognized(),
    }
}

/// Detect the dialect of an already-read value tree.
#[must_use]
pub fn detect_value(value: &Value) -> DetectionResult {
    let Some(root) = value.as_object() else {
        return DetectionResult::unrecognized();
    };

    let result = detect_markers(root).unwrap_or_else(DetectionResult::unrecognized);

    tracing::debug!(
        "Format detection: dialect={:?}, label={:?}, unsupported={}",
        result.dialect,
        result.detected_label,
        result.is_unsupported_version
    );

    result
}

/// A marker that is present but neither a string nor `null` makes the whole
/// document unrecognized, so these return `None` in that case.
fn detect_markers(root: &serde_json::Map<String, Value>) -> Option<DetectionResult> {
    let bom_format = marker_str(root.get("bomFormat"))?;
    if bom_format.is_some_and(|format| format.eq_ignore_ascii_case("CycloneDX")) {
        return detect_cyclonedx_version(root.get("specVersion"));
    }

    match root.get("spdxVersion") {
        Some(spdx_version) => detect_spdx_version(spdx_version),
        None => Some(DetectionResult::unrecognized()),
    }
}

/// Absent and `null` markers read as `Some(None)`; other non-strings as `None`.
fn marker_str(value: Option<&Value>) -> Option<Option<&str>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.as_str())),
        Some(_) => None,
    }
}

/// A missing (or null) `specVersion` defaults to 1.6.
fn detect_cyclonedx_version(spec_version: Option<&Value>) -> Option<DetectionResult> {
    let result = match marker_str(spec_version)? {
        Some(v) if !SUPPORTED_CYCLONEDX_VERSIONS.contains(&v) => {
            DetectionResult::unsupported(format!("CycloneDX {v}"))
        }
        Some("1.7") => DetectionResult::supported(SbomDialect::CycloneDx1_7),
        _ => DetectionResult::supported(SbomDialect::CycloneDx1_6),
    };
    Some(result)
}

/// SPDX carries its version in the marker itself, so the raw value is the
/// label. A null marker reads as 2.2.
fn detect_spdx_version(spdx_version: &Value) -> Option<DetectionResult> {
    let result = match marker_str(Some(spdx_version))? {
        Some(v) if !SUPPORTED_SPDX_VERSIONS.contains(&v) => DetectionResult::unsupported(v),
        _ => DetectionResult::supported(SbomDialect::Spdx2_2),
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_unrecognized() {
        assert_eq!(detect(""), DetectionResult::unrecognized());
        assert_eq!(detect("  \n "), DetectionResult::unrecognized());
    }

    #[test]
    fn test_malformed_json_is_unrecognized() {
        assert_eq!(detect("{not valid json}}"), DetectionResult::unrecognized());
    }

    #[test]
    fn test_unknown_format() {
        let result = detect(r#"{ "format": "unknown", "version": "1.0" }"#);
        assert!(result.dialect.is_none());
        assert!(!result.is_unsupported_version);
        assert!(result.detected_label.is_none());
        assert!(!result.is_recognized());
    }

    #[test]
    fn test_non_object_root_is_unrecognized() {
        assert_eq!(detect("[1, 2, 3]"), DetectionResult::unrecognized());
        assert_eq!(detect("\"CycloneDX\""), DetectionResult::unrecognized());
    }

    #[test]
    fn test_detect_cyclonedx_versions() {
        let v16 = detect(r#"{"bomFormat": "CycloneDX", "specVersion": "1.6"}"#);
        assert_eq!(v16.dialect, Some(SbomDialect::CycloneDx1_6));
        assert_eq!(v16.detected_label.as_deref(), Some("CycloneDX 1.6"));

        let v17 = detect(r#"{"bomFormat": "CycloneDX", "specVersion": "1.7"}"#);
        assert_eq!(v17.dialect, Some(SbomDialect::CycloneDx1_7));
        assert_eq!(v17.detected_label.as_deref(), Some("CycloneDX 1.7"));
    }

    #[test]
    fn test_bom_format_is_case_insensitive() {
        let result = detect(r#"{"bomFormat": "cyclonedx", "specVersion": "1.7"}"#);
        assert_eq!(result.dialect, Some(SbomDialect::CycloneDx1_7));
    }

    #[test]
    fn test_missing_spec_version_defaults_to_1_6() {
        let result = detect(r#"{"bomFormat": "CycloneDX", "version": 1}"#);
        assert_eq!(result.dialect, Some(SbomDialect::CycloneDx1_6));
        assert!(!result.is_unsupported_version);
    }

    #[test]
    fn test_unsupported_cyclonedx_version() {
        let result = detect(r#"{"bomFormat": "CycloneDX", "specVersion": "1.5"}"#);
        assert!(result.dialect.is_none());
        assert!(result.is_unsupported_version);
        assert_eq!(result.detected_label.as_deref(), Some("CycloneDX 1.5"));
    }

    #[test]
    fn test_numeric_spec_version_is_unrecognized() {
        let result = detect(r#"{"bomFormat": "CycloneDX", "specVersion": 1.6}"#);
        assert_eq!(result, DetectionResult::unrecognized());
    }

    #[test]
    fn test_null_spec_version_defaults_to_1_6() {
        let result = detect(r#"{"bomFormat": "CycloneDX", "specVersion": null}"#);
        assert_eq!(result.dialect, Some(SbomDialect::CycloneDx1_6));
    }

    #[test]
    fn test_non_string_bom_format_is_unrecognized() {
        let result = detect(r#"{"bomFormat": 7, "specVersion": "1.6"}"#);
        assert_eq!(result, DetectionResult::unrecognized());

        // Even with a valid SPDX marker alongside
        let result = detect(r#"{"bomFormat": 7, "spdxVersion": "SPDX-2.2"}"#);
        assert_eq!(result, DetectionResult::unrecognized());
    }

    #[test]
    fn test_null_bom_format_falls_through_to_spdx() {
        let result = detect(r#"{"bomFormat": null, "spdxVersion": "SPDX-2.2"}"#);
        assert_eq!(result.dialect, Some(SbomDialect::Spdx2_2));
    }

    #[test]
    fn test_null_spdx_version_reads_as_2_2() {
        let result = detect(r#"{"spdxVersion": null}"#);
        assert_eq!(result.dialect, Some(SbomDialect::Spdx2_2));
        assert!(!result.is_unsupported_version);
    }

    #[test]
    fn test_non_string_spdx_version_is_unrecognized() {
        assert_eq!(
            detect(r#"{"spdxVersion": 2.2}"#),
            DetectionResult::unrecognized()
        );
    }

    #[test]
    fn test_detect_spdx() {
        let result = detect(r#"{"spdxVersion": "SPDX-2.2", "SPDXID": "SPDXRef-DOCUMENT"}"#);
        assert_eq!(result.dialect, Some(SbomDialect::Spdx2_2));
        assert_eq!(result.detected_label.as_deref(), Some("SPDX 2.2"));
    }

    #[test]
    fn test_unsupported_spdx_uses_raw_label() {
        let result = detect(r#"{"spdxVersion": "SPDX-2.3"}"#);
        assert!(result.dialect.is_none());
        assert!(result.is_unsupported_version);
        assert_eq!(result.detected_label.as_deref(), Some("SPDX-2.3"));
    }

    #[test]
    fn test_cyclonedx_marker_wins_over_spdx_marker() {
        let result = detect(r#"{"spdxVersion": "SPDX-2.3", "bomFormat": "CycloneDX"}"#);
        assert_eq!(result.dialect, Some(SbomDialect::CycloneDx1_6));
    }

    #[test]
    fn test_supported_versions_list() {
        assert_eq!(SUPPORTED_VERSIONS.len(), 3);
        for (dialect, label) in SbomDialect::ALL.iter().zip(SUPPORTED_VERSIONS) {
            assert_eq!(dialect.label(), label);
        }
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            DetectionResult::supported(SbomDialect::Spdx2_2).status_message(),
            "Detected SPDX 2.2"
        );
        assert_eq!(
            DetectionResult::unsupported("CycloneDX 1.4").status_message(),
            "Recognized but unsupported version CycloneDX 1.4 \
             (supported: CycloneDX 1.6, CycloneDX 1.7, SPDX 2.2)"
        );
        assert_eq!(
            DetectionResult::unrecognized().status_message(),
            "Not a recognized SBOM"
        );
    }

    #[test]
    fn test_dialect_family() {
        assert_eq!(SbomDialect::CycloneDx1_7.family(), SbomFamily::CycloneDx);
        assert_eq!(SbomDialect::Spdx2_2.family(), SbomFamily::Spdx);
        assert_eq!(SbomDialect::CycloneDx1_6.spec_version(), "1.6");
    }
}
