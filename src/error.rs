//! Unified error types for sbom-viewer.
//!
//! The core parsing functions report failure as an absent result. This
//! module provides the error hierarchy used around them: file loading,
//! configuration and the command-line front end, with context chaining for
//! readable messages.

use crate::parsers::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-viewer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomViewerError {
    /// Errors while reading or mapping a document
    #[error("Failed to parse SBOM: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input larger than the configured limit
    #[error("File {path:?} is {size_mb} MB, limit is {limit_mb} MB")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        limit_mb: u64,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Output serialization errors
    #[error("Failed to write output: {0}")]
    Output(String),
}

/// Convenient Result type for sbom-viewer operations
pub type Result<T> = std::result::Result<T, SbomViewerError>;

impl SbomViewerError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The underlying parse failure, if any.
    #[must_use]
    pub const fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SbomViewerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ParseError> for SbomViewerError {
    fn from(err: ParseError) -> Self {
        Self::parse("", err)
    }
}

impl From<serde_json::Error> for SbomViewerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<serde_yaml::Error> for SbomViewerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first, so a failure reads as
/// `"loading sbom.json: reading document: Input is empty"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomViewerError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: SbomViewerError, new_ctx: &str) -> SbomViewerError {
    match err {
        SbomViewerError::Parse {
            context: existing,
            source,
        } => SbomViewerError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomViewerError::Io {
            path,
            message,
            source,
        } => SbomViewerError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomViewerError::Config(msg) => SbomViewerError::Config(chain_context(new_ctx, &msg)),
        SbomViewerError::Output(msg) => SbomViewerError::Output(chain_context(new_ctx, &msg)),
        other @ SbomViewerError::FileTooLarge { .. } => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
