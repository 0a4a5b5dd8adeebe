#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_viewer::parsers::{CycloneDxParser, SbomParser};

/// Fuzz the CycloneDX parser directly.
///
/// Wraps input as the component list of a 1.7 envelope to reach the typed
/// mapping rather than failing at detection.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parser = CycloneDxParser::new();

        let _ = parser.parse_str(s);

        if s.len() < 10_000 {
            let wrapped = format!(
                r#"{{"bomFormat":"CycloneDX","specVersion":"1.7","metadata":{{}},"components":[{s}]}}"#,
            );
            let _ = parser.parse_str(&wrapped);
        }
    }
});
