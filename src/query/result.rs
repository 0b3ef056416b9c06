//! Content query result - the immutable snapshot route planning consumes.

use serde::{Deserialize, Serialize};

use super::{CategoryDescriptor, PageDescriptor, PostDescriptor};
use crate::error::RouteError;

/// Data payload of a successful content query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySnapshot {
    /// Static pages, in query order.
    pub pages: Vec<PageDescriptor>,
    /// Posts sorted by publish date descending (query-supplied order).
    pub posts: Vec<PostDescriptor>,
    /// Categories with member post ids.
    pub categories: Vec<CategoryDescriptor>,
}

/// Outcome of a content query, mirroring the collaborator's wire shape:
/// a data payload plus an error list. Any reported error is fatal for
/// route planning; there is no partial-success mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryResult {
    pub data: Option<QuerySnapshot>,
    pub errors: Vec<String>,
}

impl QueryResult {
    /// Wrap a successful snapshot.
    pub fn ok(data: QuerySnapshot) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Wrap a failed query.
    pub fn failed<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the query reported failure (or carried no data at all).
    pub fn is_err(&self) -> bool {
        !self.errors.is_empty() || self.data.is_none()
    }

    /// Extract the snapshot, or the fatal query error.
    pub fn snapshot(&self) -> Result<&QuerySnapshot, RouteError> {
        if !self.errors.is_empty() {
            return Err(RouteError::Query(self.errors.join("; ")));
        }
        self.data
            .as_ref()
            .ok_or_else(|| RouteError::Query("query returned no data".into()))
    }
}
