//! Typed CycloneDX document model (1.6 and 1.7 subset).
//!
//! Fields that only exist in 1.7 (`lifecycles`, `tags`, `omniborId`,
//! `swhid`, `definitions`, `declarations`, `formulation`) are `Option`s and
//! stay `None` when a 1.6 document is parsed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// CycloneDX BOM document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CycloneDxDocument {
    #[serde(deserialize_with = "super::null_as_default")]
    pub bom_format: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub spec_version: String,
    pub serial_number: Option<String>,
    /// BOM revision number
    pub version: u32,
    pub metadata: Option<Metadata>,
    pub components: Vec<Component>,
    pub dependencies: Vec<Dependency>,
    /// 1.7 only
    pub formulation: Option<Vec<Formula>>,
    /// 1.7 only
    pub declarations: Option<Declarations>,
    /// 1.7 only
    pub definitions: Option<Definitions>,
}

impl CycloneDxDocument {
    /// Metadata timestamp as a UTC date, when it is valid RFC 3339.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.metadata
            .as_ref()
            .and_then(|m| m.timestamp.as_deref())
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Find a top-level component by its `bom-ref`.
    #[must_use]
    pub fn component_by_ref(&self, bom_ref: &str) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.bom_ref.as_deref() == Some(bom_ref))
    }

    /// Direct dependencies recorded for a `bom-ref`.
    ///
    /// Returns an empty slice when no dependency record exists.
    #[must_use]
    pub fn dependencies_of(&self, bom_ref: &str) -> &[String] {
        self.dependencies
            .iter()
            .find(|d| d.dependency_ref.as_deref() == Some(bom_ref))
            .map(|d| d.depends_on.as_slice())
            .unwrap_or_default()
    }
}

/// BOM metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub timestamp: Option<String>,
    /// Tools field - either an array (legacy) or an object with components/services
    #[serde(deserialize_with = "tools::deserialize")]
    pub tools: Vec<Tool>,
    pub component: Option<Component>,
    /// 1.7 only
    pub lifecycles: Option<Vec<Lifecycle>>,
}

/// Tool that produced the BOM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub vendor: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

/// CycloneDX component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: Option<String>,
    #[serde(rename = "bom-ref")]
    pub bom_ref: Option<String>,
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub scope: Option<String>,
    pub authors: Vec<Author>,
    pub hashes: Vec<Hash>,
    pub licenses: Vec<LicenseChoice>,
    /// Empty when absent or `null`
    #[serde(deserialize_with = "super::null_as_default")]
    pub purl: String,
    pub external_references: Vec<ExternalReference>,
    pub copyright: Option<String>,
    /// 1.7 only
    pub omnibor_id: Option<Vec<String>>,
    /// 1.7 only
    pub swhid: Option<Vec<String>>,
    /// 1.7 only
    pub tags: Option<Vec<String>>,
}

impl Component {
    /// License identifiers (or names when no SPDX id is given).
    pub fn license_ids(&self) -> impl Iterator<Item = &str> {
        self.licenses
            .iter()
            .filter_map(|choice| choice.license.as_ref())
            .filter_map(|license| license.id.as_deref().or(license.name.as_deref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hash {
    pub alg: Option<String>,
    pub content: Option<String>,
}

/// Wrapper around a single license entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseChoice {
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalReference {
    #[serde(rename = "type")]
    pub ref_type: Option<String>,
    pub url: Option<String>,
}

/// Dependency record: `ref` depends on every entry of `dependsOn`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dependency {
    #[serde(rename = "ref")]
    pub dependency_ref: Option<String>,
    pub depends_on: Vec<String>,
}

/// Lifecycle phase (1.7)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lifecycle {
    pub phase: Option<String>,
    pub description: Option<String>,
}

/// Formula describing how components were built (1.7)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formula {
    #[serde(rename = "bom-ref")]
    pub bom_ref: Option<String>,
    pub components: Option<Vec<Component>>,
}

/// Attestation declarations (1.7)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Declarations {
    pub assessors: Option<Vec<Assessor>>,
    pub claims: Option<Vec<Claim>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessor {
    #[serde(rename = "bom-ref")]
    pub bom_ref: Option<String>,
    pub organization: Option<OrganizationalEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationalEntity {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    #[serde(rename = "bom-ref")]
    pub bom_ref: Option<String>,
    pub target: Option<String>,
    pub predicate: Option<String>,
}

/// Standards definitions (1.7)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definitions {
    pub standards: Option<Vec<Standard>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standard {
    #[serde(rename = "bom-ref")]
    pub bom_ref: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Deserializer accepting both shapes of `metadata.tools`.
mod tools {
    use super::Tool;
    use serde::de::{self, MapAccess, SeqAccess, Visitor};
    use serde::{Deserialize, Deserializer};
    use std::fmt;

    /// Tool component in the object form
    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct ToolComponent {
        publisher: Option<String>,
        group: Option<String>,
        name: Option<String>,
        version: Option<String>,
    }

    /// Tool service in the object form
    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct ToolService {
        provider: Option<ToolProvider>,
        name: Option<String>,
        version: Option<String>,
    }

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct ToolProvider {
        name: Option<String>,
    }

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct ToolsObject {
        components: Vec<ToolComponent>,
        services: Vec<ToolService>,
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Tool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ToolsVisitor;

        impl<'de> Visitor<'de> for ToolsVisitor {
            type Value = Vec<Tool>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array of tools or an object with components/services")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Vec::new())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Vec::new())
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut tools = Vec::new();
                while let Some(tool) = seq.next_element::<Tool>()? {
                    tools.push(tool);
                }
                Ok(tools)
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let object = ToolsObject::deserialize(de::value::MapAccessDeserializer::new(map))?;

                let components = object.components.into_iter().map(|c| Tool {
                    vendor: c.publisher.or(c.group),
                    name: c.name,
                    version: c.version,
                });
                let services = object.services.into_iter().map(|s| Tool {
                    vendor: s.provider.and_then(|p| p.name),
                    name: s.name,
                    version: s.version,
                });

                Ok(components.chain(services).collect())
            }
        }

        deserializer.deserialize_any(ToolsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tools_array_form() {
        let metadata: Metadata = serde_json::from_value(json!({
            "tools": [{"vendor": "TestVendor", "name": "TestTool", "version": "1.0"}]
        }))
        .expect("should deserialize");
        assert_eq!(metadata.tools.len(), 1);
        assert_eq!(metadata.tools[0].vendor.as_deref(), Some("TestVendor"));
    }

    #[test]
    fn test_tools_object_form() {
        let metadata: Metadata = serde_json::from_value(json!({
            "tools": {
                "components": [{"type": "application", "publisher": "Acme", "name": "scanner", "version": "2.1"}],
                "services": [{"provider": {"name": "Acme Cloud"}, "name": "sbom-api"}]
            }
        }))
        .expect("should deserialize");
        assert_eq!(metadata.tools.len(), 2);
        assert_eq!(metadata.tools[0].name.as_deref(), Some("scanner"));
        assert_eq!(metadata.tools[0].vendor.as_deref(), Some("Acme"));
        assert_eq!(metadata.tools[1].vendor.as_deref(), Some("Acme Cloud"));
    }

    #[test]
    fn test_tools_null_is_empty() {
        let metadata: Metadata =
            serde_json::from_value(json!({"tools": null})).expect("should deserialize");
        assert!(metadata.tools.is_empty());
    }

    #[test]
    fn test_created_at() {
        let doc = CycloneDxDocument {
            metadata: Some(Metadata {
                timestamp: Some("2024-01-01T00:00:00Z".to_string()),
                ..Metadata::default()
            }),
            ..CycloneDxDocument::default()
        };
        let created = doc.created_at().expect("valid timestamp");
        assert_eq!(created.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let bad = CycloneDxDocument {
            metadata: Some(Metadata {
                timestamp: Some("yesterday".to_string()),
                ..Metadata::default()
            }),
            ..CycloneDxDocument::default()
        };
        assert!(bad.created_at().is_none());
    }

    #[test]
    fn test_dependency_lookup() {
        let doc = CycloneDxDocument {
            dependencies: vec![Dependency {
                dependency_ref: Some("comp-1".to_string()),
                depends_on: vec!["comp-2".to_string()],
            }],
            ..CycloneDxDocument::default()
        };
        assert_eq!(doc.dependencies_of("comp-1"), ["comp-2".to_string()]);
        assert!(doc.dependencies_of("comp-9").is_empty());
    }

    #[test]
    fn test_license_ids_fall_back_to_name() {
        let component: Component = serde_json::from_value(json!({
            "name": "c",
            "licenses": [
                {"license": {"id": "MIT"}},
                {"license": {"name": "Custom License"}},
                {}
            ]
        }))
        .expect("should deserialize");
        let ids: Vec<&str> = component.license_ids().collect();
        assert_eq!(ids, vec!["MIT", "Custom License"]);
    }
}
