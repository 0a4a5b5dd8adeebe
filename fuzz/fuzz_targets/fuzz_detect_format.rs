#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the lenient reader and format detection.
///
/// Detection must classify any text without panicking, including
/// unterminated comments and stray commas.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_viewer::parsers::detect(s);
    }
});
