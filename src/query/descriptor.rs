//! Queried entity descriptors.
//!
//! Wire field names are camelCase (`databaseId`, `nextId`, ...) to match
//! the query collaborator's response shape.

use serde::{Deserialize, Serialize};

/// A static page's route and backing identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    pub uri: String,
    pub database_id: u64,
}

impl PageDescriptor {
    pub fn new(uri: impl Into<String>, database_id: u64) -> Self {
        Self {
            uri: uri.into(),
            database_id,
        }
    }

    /// Required identifying fields present.
    pub fn is_well_formed(&self) -> bool {
        !self.uri.is_empty()
    }
}

/// A post's route plus adjacency links to its chronological neighbors.
///
/// The sequence is sorted by publish date descending: `next` is the
/// newer neighbor, `previous` the older one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDescriptor {
    pub uri: String,
    pub database_id: u64,
    /// Newer neighbor, `None` for the newest post.
    #[serde(default)]
    pub next_id: Option<u64>,
    /// Older neighbor, `None` for the oldest post.
    #[serde(default)]
    pub previous_id: Option<u64>,
}

impl PostDescriptor {
    pub fn new(uri: impl Into<String>, database_id: u64) -> Self {
        Self {
            uri: uri.into(),
            database_id,
            next_id: None,
            previous_id: None,
        }
    }

    /// Required identifying fields present.
    pub fn is_well_formed(&self) -> bool {
        !self.uri.is_empty()
    }
}

/// A category with its member posts in query-supplied order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub uri: String,
    pub database_id: u64,
    pub name: String,
    #[serde(default)]
    pub post_ids: Vec<u64>,
}

impl CategoryDescriptor {
    pub fn new(
        uri: impl Into<String>,
        database_id: u64,
        name: impl Into<String>,
        post_ids: Vec<u64>,
    ) -> Self {
        Self {
            uri: uri.into(),
            database_id,
            name: name.into(),
            post_ids,
        }
    }

    /// Required identifying fields present.
    pub fn is_well_formed(&self) -> bool {
        !self.uri.is_empty() && !self.name.is_empty()
    }
}
