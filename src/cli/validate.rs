//! Validate command handler.
//!
//! Implements the `validate` subcommand: structural checks of one SBOM,
//! followed by a typed parse to catch nested type mismatches.

use super::CommandContext;
use crate::config::OutputFormat;
use crate::parsers::{detect_value, parse_document, read_value, ValidationReport};
use crate::pipeline::{exit_codes, read_sbom_file, to_json, write_output};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Result of the validate command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationOutcome {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    dialect: Option<String>,
    missing_fields: Vec<&'static str>,
    message: String,
}

impl ValidationOutcome {
    fn invalid(message: String) -> Self {
        Self {
            valid: false,
            dialect: None,
            missing_fields: Vec::new(),
            message,
        }
    }
}

/// Run the validate command
pub fn run_validate(sbom_path: &Path, ctx: &CommandContext) -> Result<i32> {
    let loaded = read_sbom_file(sbom_path, &ctx.config.limits)?;
    let outcome = validate_text(&loaded.content);

    let content = match ctx.config.output.format {
        OutputFormat::Json => to_json(&outcome, ctx.config.output.pretty)?,
        OutputFormat::Text => {
            let palette = ctx.palette();
            if outcome.valid {
                palette.ok(&outcome.message)
            } else {
                palette.error(&outcome.message)
            }
        }
    };
    write_output(&content, &ctx.target(), ctx.quiet)?;

    Ok(if outcome.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::INVALID
    })
}

fn validate_text(text: &str) -> ValidationOutcome {
    let Some(value) = read_value(text) else {
        return ValidationOutcome::invalid("Not valid JSON".to_string());
    };

    let detection = detect_value(&value);
    let Some(dialect) = detection.dialect else {
        return ValidationOutcome::invalid(detection.status_message());
    };

    let report = ValidationReport::check(&value, dialect);
    if !report.is_valid() {
        return ValidationOutcome {
            valid: false,
            dialect: Some(dialect.label().to_string()),
            message: report.to_string(),
            missing_fields: report.missing,
        };
    }

    match parse_document(&value) {
        Ok(_) => ValidationOutcome {
            valid: true,
            dialect: Some(dialect.label().to_string()),
            missing_fields: Vec::new(),
            message: format!("Valid {dialect}"),
        },
        Err(e) => ValidationOutcome {
            valid: false,
            dialect: Some(dialect.label().to_string()),
            missing_fields: Vec::new(),
            message: format!("Invalid {}: {e}", dialect.family()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document() {
        let outcome = validate_text(
            r#"{"bomFormat": "CycloneDX", "specVersion": "1.7", "metadata": {}, "components": []}"#,
        );
        assert!(outcome.valid);
        assert_eq!(outcome.message, "Valid CycloneDX 1.7");
    }

    #[test]
    fn test_missing_fields() {
        let outcome = validate_text(r#"{"spdxVersion": "SPDX-2.2", "name": "n"}"#);
        assert!(!outcome.valid);
        assert_eq!(
            outcome.missing_fields,
            vec!["SPDXID", "dataLicense", "documentNamespace", "creationInfo"]
        );
        assert!(outcome.message.starts_with("Invalid SPDX: missing required fields"));
    }

    #[test]
    fn test_nested_type_mismatch() {
        let outcome = validate_text(
            r#"{"bomFormat": "CycloneDX", "specVersion": "1.6", "metadata": {},
                "components": [], "dependencies": [{"ref": "a", "dependsOn": [1]}]}"#,
        );
        assert!(!outcome.valid);
        assert!(outcome.message.starts_with("Invalid CycloneDX: Invalid SBOM structure"));
    }

    #[test]
    fn test_unsupported_and_unreadable() {
        let outcome = validate_text(r#"{"bomFormat": "CycloneDX", "specVersion": "1.5"}"#);
        assert!(!outcome.valid);
        assert!(outcome.message.contains("unsupported version CycloneDX 1.5"));

        assert_eq!(validate_text("{oops").message, "Not valid JSON");
    }
}
