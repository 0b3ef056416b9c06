//! Core types - pure abstractions shared across the crate.

mod url;

pub use url::RoutePath;

/// A JSON object map for route contexts and derived node fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
