//! Inferred schema tree types.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// JSON kind of an inferred node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaNodeType {
    String,
    /// Reserved; inference reports every JSON number as `Number`
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    #[default]
    Unknown,
}

impl SchemaNodeType {
    /// Whether the kind is a leaf value shown inline.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::String | Self::Integer | Self::Number | Self::Boolean
        )
    }
}

impl fmt::Display for SchemaNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Widget family a UI layer should use for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RenderHint {
    /// Left to the UI layer
    #[default]
    Auto,
    AccordionSection,
    KeyValueGroup,
    SearchableList,
    /// Never assigned by inference
    BadgeList,
}

impl fmt::Display for RenderHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::AccordionSection => "accordion",
            Self::KeyValueGroup => "key-value",
            Self::SearchableList => "searchable-list",
            Self::BadgeList => "badges",
        };
        f.write_str(name)
    }
}

/// A node of the inferred schema.
///
/// `property_order` lists the keys of `properties` in source order. Shallow
/// leaves (below the inference depth cap) carry only a name, a title and a
/// node type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    pub property_name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub node_type: SchemaNodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_schema: Option<Box<SchemaNode>>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_order: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    pub is_deprecated: bool,
    pub render_hint: RenderHint,
}

impl SchemaNode {
    /// Node with only a name, a title and a kind.
    #[must_use]
    pub fn leaf(
        property_name: impl Into<String>,
        title: impl Into<String>,
        node_type: SchemaNodeType,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            title: title.into(),
            node_type,
            ..Self::default()
        }
    }

    /// Look up a direct child by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.get(name)
    }

    /// Direct children in source order.
    pub fn children(&self) -> impl Iterator<Item = &SchemaNode> {
        self.property_order
            .iter()
            .filter_map(|name| self.properties.get(name))
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.node_type.is_scalar()
    }

    /// Insert a child, keeping `property_order` in step with `properties`.
    pub(crate) fn push_property(&mut self, child: SchemaNode) {
        let name = child.property_name.clone();
        if self.properties.insert(name.clone(), child).is_none() {
            self.property_order.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_property_keeps_order() {
        let mut node = SchemaNode::leaf("root", "root", SchemaNodeType::Object);
        node.push_property(SchemaNode::leaf("b", "B", SchemaNodeType::String));
        node.push_property(SchemaNode::leaf("a", "A", SchemaNodeType::Number));
        node.push_property(SchemaNode::leaf("b", "B", SchemaNodeType::Boolean));

        assert_eq!(node.property_order, vec!["b", "a"]);
        let kinds: Vec<_> = node.children().map(|c| c.node_type).collect();
        assert_eq!(kinds, vec![SchemaNodeType::Boolean, SchemaNodeType::Number]);
    }

    #[test]
    fn test_scalar_kinds() {
        assert!(SchemaNodeType::String.is_scalar());
        assert!(SchemaNodeType::Integer.is_scalar());
        assert!(!SchemaNodeType::Array.is_scalar());
        assert!(!SchemaNodeType::Unknown.is_scalar());
    }

    #[test]
    fn test_serialized_shape() {
        let node = SchemaNode::leaf("bomFormat", "Bom Format", SchemaNodeType::String);
        let json = serde_json::to_value(&node).expect("serializable");
        assert_eq!(json["propertyName"], "bomFormat");
        assert_eq!(json["nodeType"], "string");
        assert_eq!(json["renderHint"], "Auto");
        assert!(json.get("properties").is_none());
    }
}
