//! Configuration module for sbom-viewer.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.sbom-viewer.yaml` file in your project root or
//! `~/.config/sbom-viewer/`:
//!
//! ```yaml
//! output:
//!   format: json
//!   pretty: true
//! limits:
//!   max_file_size_mb: 20
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    DisplayConfig, LimitsConfig, OutputConfig, OutputFormat, ViewerConfig,
    DEFAULT_MAX_COMPONENTS, DEFAULT_MAX_FILE_SIZE_MB,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `ViewerConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.sbom-viewer.yaml`.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(ViewerConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
