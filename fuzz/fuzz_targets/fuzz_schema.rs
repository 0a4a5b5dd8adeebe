#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz schema inference over any readable JSON.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(value) = sbom_viewer::parsers::read_value(s) {
            let schema = sbom_viewer::schema::infer(&value);
            assert_eq!(schema.property_order.len(), schema.properties.len());
        }
    }
});
