//! Typed SBOM document models.
//!
//! The models mirror the JSON field names of each format (serde renames take
//! care of the casing) and tolerate absent optional fields and arrays.
//! Unknown fields are ignored.

mod cyclonedx;
mod spdx;

pub use cyclonedx::*;
pub use spdx::*;

use crate::parsers::SbomFamily;
use serde::{Deserialize, Deserializer, Serialize};

/// Reads JSON `null` as the field type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A parsed SBOM of either family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SbomDocument {
    CycloneDx(Box<CycloneDxDocument>),
    Spdx(Box<SpdxDocument>),
}

impl SbomDocument {
    #[must_use]
    pub const fn family(&self) -> SbomFamily {
        match self {
            Self::CycloneDx(_) => SbomFamily::CycloneDx,
            Self::Spdx(_) => SbomFamily::Spdx,
        }
    }

    /// Display name: the SPDX document name or the CycloneDX primary component.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::CycloneDx(doc) => doc
                .metadata
                .as_ref()
                .and_then(|m| m.component.as_ref())
                .map(|c| c.name.as_str()),
            Self::Spdx(doc) => Some(doc.name.as_str()),
        }
    }

    /// Number of components (CycloneDX) or packages (SPDX).
    #[must_use]
    pub fn component_count(&self) -> usize {
        match self {
            Self::CycloneDx(doc) => doc.components.len(),
            Self::Spdx(doc) => doc.packages.len(),
        }
    }

    #[must_use]
    pub fn as_cyclonedx(&self) -> Option<&CycloneDxDocument> {
        match self {
            Self::CycloneDx(doc) => Some(doc),
            Self::Spdx(_) => None,
        }
    }

    #[must_use]
    pub fn as_spdx(&self) -> Option<&SpdxDocument> {
        match self {
            Self::Spdx(doc) => Some(doc),
            Self::CycloneDx(_) => None,
        }
    }
}

impl From<CycloneDxDocument> for SbomDocument {
    fn from(doc: CycloneDxDocument) -> Self {
        Self::CycloneDx(Box::new(doc))
    }
}

impl From<SpdxDocument> for SbomDocument {
    fn from(doc: SpdxDocument) -> Self {
        Self::Spdx(Box::new(doc))
    }
}
