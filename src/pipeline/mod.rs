//! Pipeline orchestration for SBOM operations.
//!
//! Shared load → analyze → output logic used by the CLI command handlers.

mod analyze;
mod load;
mod output;

pub use analyze::{analyze, Analysis};
pub use load::{read_sbom_file, LoadedFile};
pub use output::{should_use_color, to_json, write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - every document is recognized, supported and valid
    pub const SUCCESS: i32 = 0;
    /// A document is unrecognized, of an unsupported version, or invalid
    pub const INVALID: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::INVALID, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
