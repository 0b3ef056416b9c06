//! Duplicate route path detection.
//!
//! The registration sink is last-write-wins, so duplicate paths silently
//! shadow each other unless caught during planning.

use rustc_hash::FxHashMap;

use super::route::RouteDescriptor;
use crate::config::{DuplicatePolicy, RoutingConfig};
use crate::core::RoutePath;
use crate::error::RouteError;
use crate::log;

/// A path claimed by more than one planned route.
#[derive(Debug, Clone)]
pub struct RouteConflict {
    /// The conflicting path
    pub path: RoutePath,
    /// Template names of every route claiming this path, in plan order
    pub claims: Vec<&'static str>,
}

/// Detect paths claimed by more than one route, sorted by path.
pub fn detect_conflicts(routes: &[RouteDescriptor]) -> Vec<RouteConflict> {
    let mut by_path: FxHashMap<&RoutePath, Vec<&'static str>> = FxHashMap::default();
    for route in routes {
        by_path
            .entry(&route.path)
            .or_default()
            .push(route.template.name());
    }

    let mut conflicts: Vec<RouteConflict> = by_path
        .into_iter()
        .filter(|(_, claims)| claims.len() > 1)
        .map(|(path, claims)| RouteConflict {
            path: path.clone(),
            claims,
        })
        .collect();
    conflicts.sort_by(|a, b| a.path.cmp(&b.path));
    conflicts
}

/// Apply the configured duplicate policy to a planned route set.
pub fn apply_policy(routes: &[RouteDescriptor], config: &RoutingConfig) -> Result<(), RouteError> {
    if config.on_duplicate == DuplicatePolicy::Ignore {
        return Ok(());
    }

    let conflicts = detect_conflicts(routes);
    if conflicts.is_empty() {
        return Ok(());
    }

    if config.on_duplicate == DuplicatePolicy::Reject {
        return Err(RouteError::Conflicts(format_conflicts(&conflicts)));
    }

    log!("warning"; "route path conflicts ({} path{})",
        conflicts.len(), if conflicts.len() == 1 { "" } else { "s" });
    for conflict in &conflicts {
        log!("warning"; "{} claimed by {}", conflict.path, conflict.claims.join(", "));
    }
    Ok(())
}

/// Format conflicts as a string (for error messages).
fn format_conflicts(conflicts: &[RouteConflict]) -> String {
    conflicts
        .iter()
        .map(|conflict| {
            format!(
                "{} ({} claims: {})",
                conflict.path,
                conflict.claims.len(),
                conflict.claims.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
