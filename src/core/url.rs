//! Route path type for type-safe URL path handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Registration boundary: encode on output via [`RoutePath::to_encoded`]

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Normalized URL path for a planned route.
///
/// Invariants:
/// - Always starts with `/`
/// - Forward slashes only (backslashes are normalized)
/// - No duplicate slashes
/// - Trailing slash preserved as supplied
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Create a route path, normalizing slashes. Preserves the trailing
    /// slash convention of the input.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let mut normalized = String::with_capacity(trimmed.len() + 1);
        normalized.push('/');
        let mut prev_slash = true;
        for c in trimmed.chars() {
            let c = if c == '\\' { '/' } else { c };
            if c == '/' {
                if prev_slash {
                    continue;
                }
                prev_slash = true;
            } else {
                prev_slash = false;
            }
            normalized.push(c);
        }

        Self(Arc::from(normalized))
    }

    /// Get the decoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root path (`/`).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Check if the path carries a trailing slash.
    #[inline]
    pub fn has_trailing_slash(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Append a path fragment, collapsing the joining slashes.
    ///
    /// `/posts` + `/hello-world/` -> `/posts/hello-world/`
    pub fn join(&self, tail: &str) -> Self {
        let tail = Self::new(tail);
        if tail.is_root() {
            return self.clone();
        }
        let base = self.0.trim_end_matches('/');
        Self::new(&format!("{}{}", base, tail.as_str()))
    }

    /// Path for the given 1-based listing page number.
    ///
    /// Page 1 is served at the bare path; pages >= 2 get a numeric tail
    /// in the same trailing-slash style as the base:
    ///
    /// `/news` -> `/news/2`, `/news/` -> `/news/2/`
    pub fn join_page(&self, number: usize) -> Self {
        if number <= 1 {
            return self.clone();
        }
        let base = self.0.trim_end_matches('/');
        if self.has_trailing_slash() {
            Self::new(&format!("{base}/{number}/"))
        } else {
            Self::new(&format!("{base}/{number}"))
        }
    }

    /// Encode for the registration boundary (percent-encode non-ASCII
    /// and special characters, per path segment).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoutePath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RoutePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoutePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}
