//! Content node kind definitions.

use serde::{Deserialize, Serialize};

/// Kind of an ingested content node, determines derivation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Markdown article under the content root - gets a derived slug.
    Article,
    /// Static page backed by the CMS.
    Page,
    /// Blog post backed by the CMS.
    Post,
    /// Post category.
    Category,
}

impl NodeKind {
    /// Parse a node kind from its ingestion tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "article" => Some(Self::Article),
            "page" => Some(Self::Page),
            "post" => Some(Self::Post),
            "category" => Some(Self::Category),
            _ => None,
        }
    }

    /// Display name for this node kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Page => "page",
            Self::Post => "post",
            Self::Category => "category",
        }
    }

    /// Check if this kind takes part in slug derivation.
    #[inline]
    pub fn is_article(self) -> bool {
        matches!(self, Self::Article)
    }
}
