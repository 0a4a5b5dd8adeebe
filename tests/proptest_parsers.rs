//! Property-based tests for the lenient reader, the detector and the parsers.
//!
//! These verify that arbitrary input never panics and that the comment and
//! trailing-comma extensions do not change what a document means.

use proptest::prelude::*;
use sbom_viewer::parsers::{detect, parse_cyclonedx, parse_spdx, read_value};
use sbom_viewer::schema::infer;

/// Strategy producing a supported or unsupported CycloneDX version string.
fn cyclonedx_version() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1.6".to_string()),
        Just("1.7".to_string()),
        "1\\.[0-5]",
        "[2-9]\\.[0-9]",
    ]
}

/// Strategy producing component names that need no JSON escaping.
fn component_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}"
}

fn cyclonedx_text(version: &str, names: &[String], lenient: bool) -> String {
    let (comma, line_comment, block_comment) = if lenient {
        (",", "// generated\n", "/* spec */ ")
    } else {
        ("", "", "")
    };
    let components: Vec<String> = names
        .iter()
        .map(|n| format!(r#"{{"type": "library", "name": "{n}"{comma}}}"#))
        .collect();
    let list_comma = if names.is_empty() { "" } else { comma };
    format!(
        "{line_comment}{{\n  \"bomFormat\": \"CycloneDX\",\n  {block_comment}\"specVersion\": \"{version}\",\n  \"metadata\": {{}},\n  \"components\": [{}{list_comma}]{comma}\n}}",
        components.join(", "),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Arbitrary text must never panic any entry point.
    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,256}") {
        let _ = detect(&text);
        let _ = parse_cyclonedx(&text);
        let _ = parse_spdx(&text);
        if let Some(value) = read_value(&text) {
            let _ = infer(&value);
        }
    }

    /// JSON-looking noise exercises the comment and comma scanner.
    #[test]
    fn json_like_noise_never_panics(text in "[{}\\[\\],:\"/*\\\\ a-z0-9\n]{0,128}") {
        let _ = read_value(&text);
        let _ = detect(&text);
    }

    /// Detection is a pure function of the text.
    #[test]
    fn detection_is_deterministic(version in cyclonedx_version()) {
        let text = format!(r#"{{"bomFormat": "CycloneDX", "specVersion": "{version}"}}"#);
        prop_assert_eq!(detect(&text), detect(&text));
    }

    /// Recognized but unsupported versions never produce a typed document.
    #[test]
    fn unsupported_versions_never_parse(version in cyclonedx_version()) {
        let text = cyclonedx_text(&version, &[], false);
        let detection = detect(&text);
        if detection.is_unsupported_version {
            prop_assert!(detection.dialect.is_none());
            prop_assert!(parse_cyclonedx(&text).is_none());
        } else {
            prop_assert!(detection.dialect.is_some());
            prop_assert!(parse_cyclonedx(&text).is_some());
        }
        prop_assert!(parse_spdx(&text).is_none());
    }

    /// Comments and trailing commas read to the same value as plain JSON.
    #[test]
    fn lenient_extensions_are_transparent(
        version in cyclonedx_version(),
        names in prop::collection::vec(component_name(), 0..8),
    ) {
        let plain = cyclonedx_text(&version, &names, false);
        let lenient = cyclonedx_text(&version, &names, true);

        let plain_value = read_value(&plain);
        prop_assert!(plain_value.is_some());
        prop_assert_eq!(&read_value(&lenient), &plain_value);
        prop_assert_eq!(detect(&lenient), detect(&plain));
    }

    /// Every component of a supported document survives typed parsing in order.
    #[test]
    fn components_keep_source_order(names in prop::collection::vec(component_name(), 0..16)) {
        let text = cyclonedx_text("1.7", &names, true);
        let bom = parse_cyclonedx(&text).expect("supported document");
        let parsed: Vec<&str> = bom.components.iter().map(|c| c.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed, expected);
    }

    /// Schema property order follows source key order.
    #[test]
    fn schema_preserves_key_order(keys in prop::collection::btree_set("[a-z]{1,8}", 1..10)) {
        // Reverse so source order differs from sorted order
        let keys: Vec<String> = keys.into_iter().rev().collect();
        let body: Vec<String> = keys.iter().map(|k| format!(r#""{k}": 1"#)).collect();
        let value = read_value(&format!("{{{}}}", body.join(", "))).expect("valid JSON");
        prop_assert_eq!(infer(&value).property_order, keys);
    }
}
