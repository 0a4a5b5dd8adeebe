//! Reading SBOM files from disk.

use crate::config::LimitsConfig;
use crate::error::{ErrorContext, Result, SbomViewerError};
use std::path::{Path, PathBuf};

/// Raw text of an SBOM file
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub content: String,
}

impl LoadedFile {
    /// File name without directories, for display.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Read an SBOM file, refusing files above the configured size limit.
pub fn read_sbom_file(path: &Path, limits: &LimitsConfig) -> Result<LoadedFile> {
    let metadata = std::fs::metadata(path).map_err(|e| SbomViewerError::io(path, e))?;

    if metadata.len() > limits.max_file_size_bytes() {
        return Err(SbomViewerError::FileTooLarge {
            path: path.to_path_buf(),
            size_mb: metadata.len().div_ceil(1024 * 1024),
            limit_mb: limits.max_file_size_mb,
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SbomViewerError::io(path, e))
        .with_context(|| format!("reading {}", path.display()))?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    Ok(LoadedFile {
        path: path.to_path_buf(),
        content,
    })
}
