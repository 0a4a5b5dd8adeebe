//! Depth-bounded schema inference over generic JSON.

use super::node::{RenderHint, SchemaNode, SchemaNodeType};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Objects deeper than this produce shallow leaves for their children.
pub const MAX_RECURSION_DEPTH: usize = 1;

/// Root children rendered as searchable lists.
pub const SEARCHABLE_SECTIONS: [&str; 5] = [
    "components",
    "packages",
    "files",
    "vulnerabilities",
    "services",
];

/// Root children rendered as accordion sections.
pub const ACCORDION_SECTIONS: [&str; 2] = ["dependencies", "relationships"];

const ROOT_NAME: &str = "root";
const ITEM_NAME: &str = "item";

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("static regex"));

/// Infers a [`SchemaNode`] tree from any JSON value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaInferrer;

impl SchemaInferrer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Infer the schema of a document root.
    #[must_use]
    pub fn infer(&self, value: &Value) -> SchemaNode {
        let mut root = node_for(ROOT_NAME, value, 0);
        assign_render_hints(&mut root);
        tracing::debug!(
            "Inferred schema with {} top-level properties",
            root.property_order.len()
        );
        root
    }
}

/// Infer the schema of a document root.
#[must_use]
pub fn infer(value: &Value) -> SchemaNode {
    SchemaInferrer::new().infer(value)
}

fn node_for(name: &str, value: &Value, depth: usize) -> SchemaNode {
    let mut node = SchemaNode::leaf(name, humanize(name), node_type_of(value));

    match value {
        Value::Object(map) => fill_properties(&mut node, map, depth),
        Value::Array(items) => {
            if let Some(first @ Value::Object(_)) = items.first() {
                node.item_schema = Some(Box::new(node_for(ITEM_NAME, first, depth + 1)));
            }
        }
        _ => {}
    }

    node
}

fn fill_properties(node: &mut SchemaNode, map: &Map<String, Value>, depth: usize) {
    for (key, child) in map {
        let child_node = if depth < MAX_RECURSION_DEPTH {
            node_for(key, child, depth + 1)
        } else {
            SchemaNode::leaf(key.as_str(), humanize(key), node_type_of(child))
        };
        node.push_property(child_node);
    }
}

const fn node_type_of(value: &Value) -> SchemaNodeType {
    match value {
        Value::String(_) => SchemaNodeType::String,
        Value::Number(_) => SchemaNodeType::Number,
        Value::Bool(_) => SchemaNodeType::Boolean,
        Value::Array(_) => SchemaNodeType::Array,
        Value::Object(_) => SchemaNodeType::Object,
        Value::Null => SchemaNodeType::Unknown,
    }
}

/// Hints apply to direct children of the root only.
fn assign_render_hints(root: &mut SchemaNode) {
    for (name, child) in &mut root.properties {
        if child.is_scalar() {
            child.render_hint = RenderHint::KeyValueGroup;
        }
        if SEARCHABLE_SECTIONS.contains(&name.as_str()) {
            child.render_hint = RenderHint::SearchableList;
        } else if ACCORDION_SECTIONS.contains(&name.as_str()) {
            child.render_hint = RenderHint::AccordionSection;
        }
    }
}

/// Turn a property name into a display title.
///
/// `serialNumber` becomes `Serial Number` and `bom-ref` becomes `Bom Ref`.
/// Words written fully in capitals are kept (`SPDXID`).
#[must_use]
pub fn humanize(name: &str) -> String {
    if name == ROOT_NAME || name == ITEM_NAME {
        return name.to_string();
    }

    let spaced = CAMEL_BOUNDARY.replace_all(name, "$1 $2");
    let spaced = spaced.replace(['-', '_'], " ");
    spaced
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let has_lower = word.chars().any(char::is_lowercase);
    if !has_lower {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
