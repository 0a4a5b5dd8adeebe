//! Typed SPDX 2.2 document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SPDX document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpdxDocument {
    #[serde(deserialize_with = "super::null_as_default")]
    pub spdx_version: String,
    pub data_license: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub document_namespace: String,
    pub creation_info: CreationInfo,
    pub packages: Vec<Package>,
    pub relationships: Vec<Relationship>,
}

impl SpdxDocument {
    /// Creation date as UTC, when `creationInfo.created` is valid RFC 3339.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.creation_info.created_at()
    }

    /// Find a package by its `SPDXID`.
    #[must_use]
    pub fn package_by_id(&self, spdx_id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.spdx_id == spdx_id)
    }

    /// Relationships whose source element is `spdx_id`.
    pub fn relationships_from<'a>(
        &'a self,
        spdx_id: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| r.spdx_element_id.as_deref() == Some(spdx_id))
    }
}

/// Who and what created the document, and when
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreationInfo {
    pub created: String,
    pub creators: Vec<String>,
    pub license_list_version: Option<String>,
    pub comment: Option<String>,
}

impl CreationInfo {
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// SPDX package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub version_info: Option<String>,
    pub download_location: Option<String>,
    pub files_analyzed: Option<bool>,
    pub license_concluded: Option<String>,
    pub license_declared: Option<String>,
    pub copyright_text: Option<String>,
    pub supplier: Option<String>,
}

/// Relationship between two SPDX elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Relationship {
    pub spdx_element_id: Option<String>,
    pub relationship_type: Option<String>,
    pub related_spdx_element: Option<String>,
}
