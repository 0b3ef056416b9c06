//! Planning error types.
//!
//! Only conditions that abort a whole planning pass become errors;
//! locally-recovered conditions (an unresolvable source path, a skipped
//! descriptor under the default policy) are warn-and-continue paths.

use thiserror::Error;

/// Errors that abort a route-planning pass.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The content query collaborator reported failure. Fatal: no routes
    /// are emitted, there is no partial-success mode.
    #[error("content query failed: {0}")]
    Query(String),

    /// A descriptor is missing required identifying fields, under the
    /// `fail` policy.
    #[error("malformed {kind} descriptor at index {index}: {detail}")]
    Malformed {
        kind: &'static str,
        index: usize,
        detail: String,
    },

    /// Multiple planned routes claim the same path, under the `reject`
    /// policy.
    #[error("route path conflicts:\n{0}")]
    Conflicts(String),
}
