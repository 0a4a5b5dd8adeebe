//! Structural validation of classified SBOM documents.
//!
//! Checks the presence and JSON kind of the handful of fields each dialect
//! cannot do without. Every problem is collected in a single pass so a user
//! can fix a document at once instead of one field per attempt.

use super::detection::{SbomDialect, SbomFamily};
use serde_json::Value;
use std::fmt;

/// JSON kind a required field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// Any value, including `null`
    Any,
    /// A JSON object (never `null`)
    Object,
    /// A JSON array, possibly empty
    Array,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Object => value.is_object(),
            Self::Array => value.is_array(),
        }
    }
}

/// A required top-level field.
#[derive(Debug, Clone, Copy)]
struct RequiredField {
    name: &'static str,
    kind: FieldKind,
}

impl RequiredField {
    const fn any(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Any,
        }
    }

    const fn object(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Object,
        }
    }

    const fn array(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Array,
        }
    }
}

// Order is observable in the combined message.
const CYCLONEDX_REQUIRED: &[RequiredField] = &[
    RequiredField::any("bomFormat"),
    RequiredField::any("specVersion"),
    RequiredField::object("metadata"),
    RequiredField::array("components"),
];

const SPDX_REQUIRED: &[RequiredField] = &[
    RequiredField::any("spdxVersion"),
    RequiredField::any("name"),
    RequiredField::any("SPDXID"),
    RequiredField::any("dataLicense"),
    RequiredField::any("documentNamespace"),
    RequiredField::object("creationInfo"),
];

const fn required_fields(family: SbomFamily) -> &'static [RequiredField] {
    match family {
        SbomFamily::CycloneDx => CYCLONEDX_REQUIRED,
        SbomFamily::Spdx => SPDX_REQUIRED,
    }
}

/// Names of required fields that are missing or have the wrong JSON kind.
///
/// A root that is not an object is missing every field.
#[must_use]
pub fn missing_fields(value: &Value, dialect: SbomDialect) -> Vec<&'static str> {
    let root = value.as_object();
    required_fields(dialect.family())
        .iter()
        .filter(|field| {
            !root
                .and_then(|r| r.get(field.name))
                .is_some_and(|v| field.kind.matches(v))
        })
        .map(|field| field.name)
        .collect()
}

/// Outcome of structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Dialect the document was validated against
    pub dialect: SbomDialect,
    /// Missing or malformed fields, in declaration order
    pub missing: Vec<&'static str>,
}

impl ValidationReport {
    /// Validate a value tree against a dialect's required fields.
    #[must_use]
    pub fn check(value: &Value, dialect: SbomDialect) -> Self {
        Self {
            dialect,
            missing: missing_fields(value, dialect),
        }
    }

    /// Check if no required field is missing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Combined message, or `None` when valid.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        (!self.is_valid()).then(|| self.to_string())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Valid {}", self.dialect.family())
        } else {
            write!(
                f,
                "Invalid {}: missing required fields: {}",
                self.dialect.family(),
                self.missing.join(", ")
            )
        }
    }
}

/// Lightweight pre-parse check of a classified document.
///
/// Returns `None` when valid, otherwise one message naming every missing
/// or malformed field.
#[must_use]
pub fn validate(value: &Value, dialect: SbomDialect) -> Option<String> {
    let report = ValidationReport::check(value, dialect);
    if !report.is_valid() {
        tracing::debug!("{}", report);
    }
    report.message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_cyclonedx() {
        let value = json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.6",
            "metadata": {},
            "components": []
        });
        assert!(validate(&value, SbomDialect::CycloneDx1_6).is_none());
        assert!(validate(&value, SbomDialect::CycloneDx1_7).is_none());
    }

    #[test]
    fn test_cyclonedx_reports_all_missing_fields() {
        let value = json!({"bomFormat": "CycloneDX"});
        assert_eq!(
            validate(&value, SbomDialect::CycloneDx1_6).as_deref(),
            Some("Invalid CycloneDX: missing required fields: specVersion, metadata, components")
        );
    }

    #[test]
    fn test_wrong_kind_counts_as_missing() {
        let value = json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.6",
            "metadata": "not an object",
            "components": {}
        });
        assert_eq!(
            missing_fields(&value, SbomDialect::CycloneDx1_6),
            vec!["metadata", "components"]
        );
    }

    #[test]
    fn test_spdx_reports_five_fields_in_order() {
        let value = json!({"spdxVersion": "SPDX-2.2"});
        assert_eq!(
            validate(&value, SbomDialect::Spdx2_2).as_deref(),
            Some(
                "Invalid SPDX: missing required fields: \
                 name, SPDXID, dataLicense, documentNamespace, creationInfo"
            )
        );
    }

    #[test]
    fn test_spdx_null_creation_info_is_missing() {
        let value = json!({
            "spdxVersion": "SPDX-2.2",
            "name": "n",
            "SPDXID": "SPDXRef-DOCUMENT",
            "dataLicense": "CC0-1.0",
            "documentNamespace": "https://example.org/n",
            "creationInfo": null
        });
        assert_eq!(
            missing_fields(&value, SbomDialect::Spdx2_2),
            vec!["creationInfo"]
        );
    }

    #[test]
    fn test_non_object_root_misses_everything() {
        let report = ValidationReport::check(&json!([]), SbomDialect::Spdx2_2);
        assert_eq!(report.missing.len(), 6);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_report_display_when_valid() {
        let report = ValidationReport {
            dialect: SbomDialect::CycloneDx1_7,
            missing: Vec::new(),
        };
        assert_eq!(report.to_string(), "Valid CycloneDX");
        assert!(report.message().is_none());
    }
}
