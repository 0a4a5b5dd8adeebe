//! Configuration types for sbom-viewer.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default cap on input size, in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 100;

/// Default number of components listed by `view`.
pub const DEFAULT_MAX_COMPONENTS: usize = 50;

/// Unified application configuration loaded from config files and CLI args.
///
/// CLI arguments override file settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ViewerConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// What `view` shows
    pub display: DisplayConfig,
    /// Input limits
    pub limits: LimitsConfig,
}

impl ViewerConfig {
    /// Create a new `ViewerConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Output format for command results
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

/// Display configuration for `view`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum components or packages listed in text output
    #[schemars(range(min = 1))]
    pub max_components: usize,
    /// Print the inferred schema after the document summary
    pub show_schema: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_components: DEFAULT_MAX_COMPONENTS,
            show_schema: false,
        }
    }
}

/// Input limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LimitsConfig {
    /// Refuse to read files larger than this many megabytes
    #[schemars(range(min = 1))]
    pub max_file_size_mb: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
        }
    }
}

impl LimitsConfig {
    /// Limit in bytes.
    #[must_use]
    pub const fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}
