//! Content nodes - the ingestion-side view of content items.
//!
//! Nodes are owned by the external content store; this crate only reads
//! them and appends derived fields during ingestion.

mod kind;
mod slug;

pub use kind::NodeKind;
pub use slug::{SLUG_FIELD, annotate, annotate_all, derive_slug, file_path_resolver};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::JsonMap;

/// An ingested content item.
///
/// `kind` is the raw ingestion tag; unknown tags are valid and simply
/// take no part in slug derivation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentNode {
    /// Raw ingestion kind tag (e.g. "article").
    pub kind: String,
    /// Source file location.
    pub source_path: PathBuf,
    /// Derived fields attached during ingestion, visible to later queries.
    #[serde(default)]
    pub fields: JsonMap,
}

impl ContentNode {
    pub fn new(kind: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            kind: kind.into(),
            source_path: source_path.into(),
            fields: JsonMap::new(),
        }
    }

    /// Parsed node kind, `None` for unknown tags.
    pub fn node_kind(&self) -> Option<NodeKind> {
        NodeKind::from_tag(&self.kind)
    }

    /// Look up a derived field.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_parsing() {
        let node = ContentNode::new("article", "content/hello.md");
        assert_eq!(node.node_kind(), Some(NodeKind::Article));

        let node = ContentNode::new("attachment", "content/photo.jpg");
        assert_eq!(node.node_kind(), None);
    }

    #[test]
    fn test_field_lookup() {
        let mut node = ContentNode::new("article", "content/hello.md");
        assert!(node.field("slug").is_none());

        node.fields
            .insert("slug".into(), serde_json::Value::String("/a/".into()));
        assert_eq!(node.field("slug").and_then(|v| v.as_str()), Some("/a/"));
    }
}
