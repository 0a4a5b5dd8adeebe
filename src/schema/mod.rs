//! Generic schema inference for SBOM-shaped JSON.
//!
//! Works on any JSON value tree, including documents no dialect recognizes,
//! and is the fallback rendering path when no typed model exists.
//!
//! The walk is deliberately bounded to two JSON levels
//! ([`MAX_RECURSION_DEPTH`]) and derives array item schemas from the first
//! element only. Apart from that the inference is purely structural: the
//! only domain knowledge is the fixed set of root field names in
//! [`SEARCHABLE_SECTIONS`] and [`ACCORDION_SECTIONS`], which receive list
//! and accordion render hints whatever the dialect.
//!
//! ```
//! use sbom_viewer::schema::{infer, RenderHint};
//! use serde_json::json;
//!
//! let schema = infer(&json!({"name": "doc", "packages": []}));
//! assert_eq!(schema.property_order, vec!["name", "packages"]);
//! assert_eq!(
//!     schema.property("packages").map(|p| p.render_hint),
//!     Some(RenderHint::SearchableList)
//! );
//! ```

mod inference;
mod node;

pub use inference::{
    humanize, infer, SchemaInferrer, ACCORDION_SECTIONS, MAX_RECURSION_DEPTH,
    SEARCHABLE_SECTIONS,
};
pub use node::{RenderHint, SchemaNode, SchemaNodeType};
