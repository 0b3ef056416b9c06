//! Siteplan - content route planning for CMS-backed static blogs.
//!
//! Two independent components, invoked by an external build dispatcher:
//!
//! - **Slug deriver** ([`node`]): annotates ingested article nodes with a
//!   derived `slug` field computed from their source file location.
//! - **Route planner** ([`planner`]): turns a content-query snapshot into
//!   the flat set of routes to register - single pages, single posts, and
//!   paginated post/category listings.
//!
//! Content parsing, query execution, and template rendering live in the
//! embedding system; this crate only consumes their results.
//!
//! # Example
//!
//! ```
//! use siteplan::{RoutingConfig, plan_routes};
//! use siteplan::query::{PostDescriptor, QueryResult, QuerySnapshot};
//!
//! let snapshot = QuerySnapshot {
//!     posts: vec![PostDescriptor::new("/hello-world/", 1)],
//!     ..Default::default()
//! };
//! let routes = plan_routes(&QueryResult::ok(snapshot), &RoutingConfig::default()).unwrap();
//!
//! // One post route plus one listing page
//! assert_eq!(routes.len(), 2);
//! assert_eq!(routes[0].path, "/posts/hello-world/");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod logger;
pub mod node;
pub mod planner;
pub mod query;

pub use config::{ConfigError, DuplicatePolicy, MalformedPolicy, RoutingConfig};
pub use core::{JsonMap, RoutePath};
pub use error::RouteError;
pub use node::{ContentNode, NodeKind};
pub use planner::{RouteDescriptor, Template, plan_routes};
pub use query::{CategoryDescriptor, PageDescriptor, PostDescriptor, QueryResult, QuerySnapshot};
