//! Route planning: query snapshot in, route descriptors out.
//!
//! - [`route`]: route descriptor and template types
//! - [`paginate`]: pagination shared by the post listing and category listings
//! - [`plan`]: the planning pass itself
//! - [`conflict`]: duplicate path detection
//! - [`links`]: adjacency recomputation for queries without edges

mod conflict;
mod links;
mod paginate;
mod plan;
mod route;

pub use conflict::{RouteConflict, detect_conflicts};
pub use links::link_adjacent;
pub use paginate::paginate;
pub use plan::{plan_routes, plan_snapshot};
pub use route::{RouteDescriptor, Template};
