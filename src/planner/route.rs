//! Route descriptors - the planner's unit of output.

use serde::{Deserialize, Serialize};

use crate::core::{JsonMap, RoutePath};

/// Template a route renders with.
///
/// Contract by name only; the registration sink maps each name to a
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Single static page.
    Page,
    /// Single post.
    Post,
    /// Paginated post listing.
    #[serde(rename = "posts")]
    PostList,
    /// Paginated category listing.
    #[serde(rename = "categories")]
    CategoryList,
}

impl Template {
    /// Renderer name the registration sink maps to.
    pub fn name(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
            Self::PostList => "posts",
            Self::CategoryList => "categories",
        }
    }
}

/// A planned route: path, template, and the data context handed verbatim
/// to template rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub path: RoutePath,
    pub template: Template,
    pub context: JsonMap,
}

impl RouteDescriptor {
    pub fn new(path: RoutePath, template: Template, context: JsonMap) -> Self {
        Self {
            path,
            template,
            context,
        }
    }
}
