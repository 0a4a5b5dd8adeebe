//! **Format detection, lenient parsing and schema inference for SBOM viewers.**
//!
//! `sbom-viewer` is the core of a Software Bill of Materials viewer. It takes
//! the raw text of an uploaded document and answers the questions a viewer
//! needs answered before it can render anything:
//!
//! - **What is it?** The format detector recognizes CycloneDX 1.6/1.7 and
//!   SPDX 2.2, and tells unsupported versions apart from unrecognized input.
//! - **Is it complete?** The structural validator reports every missing or
//!   malformed required field in one message.
//! - **What does it say?** The typed parsers map the document onto serde
//!   models of each format.
//! - **How should it look?** Schema inference walks any JSON document and
//!   returns an ordered schema with render hints, the fallback rendering path
//!   for documents without a typed model.
//!
//! Input is read by a lenient JSON reader that accepts `//` and `/* */`
//! comments and trailing commas. The value tree is read once and shared by
//! reference between the detector, validator, parsers and schema inference.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: reader, detector, validator and the typed
//!   [`CycloneDxParser`] and [`SpdxParser`].
//! - **[`model`]**: typed document models.
//! - **[`schema`]**: [`infer`] and the [`SchemaNode`] tree.
//! - **[`state`]**: [`SbomState`], the observable holder of the displayed document.
//! - **[`pipeline`]**: file loading and single-pass [`analyze`](pipeline::analyze).
//!
//! Every core operation reports failure as an absent result (`None`), never a
//! panic.
//!
//! ## Getting Started
//!
//! ```
//! use sbom_viewer::{detect, infer, parse_spdx, read_value, SbomDialect};
//!
//! let text = r#"{
//!     "spdxVersion": "SPDX-2.2",
//!     "name": "Test SBOM",
//!     "creationInfo": {"created": "2024-01-01T00:00:00Z", "creators": []},
//!     "packages": [],
//! }"#;
//!
//! let detection = detect(text);
//! assert_eq!(detection.dialect, Some(SbomDialect::Spdx2_2));
//!
//! let document = parse_spdx(text).expect("valid SPDX");
//! assert_eq!(document.name, "Test SBOM");
//!
//! let value = read_value(text).expect("valid JSON");
//! let schema = infer(&value);
//! assert_eq!(schema.property_order[0], "spdxVersion");
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `sbom-viewer` binary exposes `detect`, `validate`, `view`, `schema`
//! and `formats` subcommands on top of this library.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod schema;
pub mod state;

// Re-export main types for convenience
pub use config::{ConfigError, Validatable, ViewerConfig};
pub use error::{ErrorContext, Result, SbomViewerError};
pub use model::{CycloneDxDocument, SbomDocument, SpdxDocument};
pub use parsers::{
    detect, parse_cyclonedx, parse_spdx, read_value, validate, CycloneDxParser,
    DetectionResult, ParseError, SbomDialect, SbomParser, SpdxParser, SUPPORTED_VERSIONS,
};
pub use schema::{infer, RenderHint, SchemaInferrer, SchemaNode, SchemaNodeType};
pub use state::{SbomState, SubscriptionId};
