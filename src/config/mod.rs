//! Routing configuration: URL prefixes, page size, and failure policies.
//!
//! Loaded by the embedding system (typically from its own TOML config);
//! every field has a default matching the reference site layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::RoutePath;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Policy for descriptors missing required identifying fields.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Skip the offending descriptor and log a warning (default).
    #[default]
    Skip,
    /// Abort the whole planning pass.
    Fail,
}

/// Policy for duplicate paths in the planned route set.
///
/// The registration sink is last-write-wins, so duplicates silently
/// shadow each other unless caught during planning.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Log each conflict and keep all routes (default).
    #[default]
    Warn,
    /// Abort the planning pass.
    Reject,
    /// Skip the check entirely.
    Ignore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RoutingConfig {
    /// URL prefix for derived article slugs.
    pub article_prefix: RoutePath,
    /// URL prefix for single posts and the post listing.
    pub posts_prefix: RoutePath,
    /// Items per listing page.
    pub per_page: usize,
    /// What to do with descriptors missing required fields.
    pub on_malformed: MalformedPolicy,
    /// What to do when two routes claim the same path.
    pub on_duplicate: DuplicatePolicy,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            article_prefix: RoutePath::new("/articles"),
            posts_prefix: RoutePath::new("/posts"),
            per_page: 4,
            on_malformed: MalformedPolicy::Skip,
            on_duplicate: DuplicatePolicy::Warn,
        }
    }
}

impl RoutingConfig {
    /// Parse and validate a `[routing]`-style TOML section.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value constraints serde cannot express.
    ///
    /// Prefixes are normalized on deserialization ([`RoutePath::new`]), so
    /// a missing leading slash cannot occur here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::Validation(
                "per-page must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
