//! Route planning over a content query snapshot.

use serde_json::Value as JsonValue;

use super::conflict;
use super::paginate::paginate;
use super::route::{RouteDescriptor, Template};
use crate::config::{MalformedPolicy, RoutingConfig};
use crate::core::{JsonMap, RoutePath};
use crate::error::RouteError;
use crate::log;
use crate::query::{CategoryDescriptor, PageDescriptor, PostDescriptor, QueryResult, QuerySnapshot};

/// Materialize the full route set for a query result.
///
/// A query-reported error is fatal: no routes are emitted. Otherwise the
/// output is, in order: single pages, single posts, the paginated post
/// listing, and each category's paginated listing.
pub fn plan_routes(
    result: &QueryResult,
    config: &RoutingConfig,
) -> Result<Vec<RouteDescriptor>, RouteError> {
    plan_snapshot(result.snapshot()?, config)
}

/// Plan routes from an already-unwrapped snapshot.
pub fn plan_snapshot(
    snapshot: &QuerySnapshot,
    config: &RoutingConfig,
) -> Result<Vec<RouteDescriptor>, RouteError> {
    let mut routes = Vec::new();

    // Single pages: input order, no dedup (duplicate uris are caught by
    // the conflict pass below)
    for (index, page) in snapshot.pages.iter().enumerate() {
        if !page.is_well_formed() {
            malformed(config, "page", index, "missing uri")?;
            continue;
        }
        routes.push(page_route(page));
    }

    // Single posts and the post listing share the same checked set, so a
    // skipped descriptor disappears from both
    let posts = checked_posts(&snapshot.posts, config)?;
    for post in &posts {
        routes.push(post_route(post, config));
    }
    routes.extend(paginate(
        &posts,
        config.per_page,
        &config.posts_prefix,
        Template::PostList,
        &JsonMap::new(),
    ));

    // One paginated listing per category, rooted at the category's own uri
    for (index, category) in snapshot.categories.iter().enumerate() {
        if !category.is_well_formed() {
            malformed(config, "category", index, "missing uri or name")?;
            continue;
        }
        routes.extend(category_listing(category, config));
    }

    conflict::apply_policy(&routes, config)?;

    log!("plan"; "{} route{} planned ({} page{}, {} post{}, {} categor{})",
        routes.len(), plural(routes.len()),
        snapshot.pages.len(), plural(snapshot.pages.len()),
        snapshot.posts.len(), plural(snapshot.posts.len()),
        snapshot.categories.len(), if snapshot.categories.len() == 1 { "y" } else { "ies" });

    Ok(routes)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Route for a single static page.
fn page_route(page: &PageDescriptor) -> RouteDescriptor {
    let mut context = JsonMap::new();
    context.insert("databaseId".into(), page.database_id.into());

    RouteDescriptor::new(RoutePath::new(&page.uri), Template::Page, context)
}

/// Route for a single post, prefixed and carrying its adjacency.
fn post_route(post: &PostDescriptor, config: &RoutingConfig) -> RouteDescriptor {
    let mut context = JsonMap::new();
    context.insert("databaseId".into(), post.database_id.into());
    context.insert("nextId".into(), opt_id(post.next_id));
    context.insert("previousId".into(), opt_id(post.previous_id));

    RouteDescriptor::new(config.posts_prefix.join(&post.uri), Template::Post, context)
}

/// Paginated listing routes for one category.
fn category_listing(category: &CategoryDescriptor, config: &RoutingConfig) -> Vec<RouteDescriptor> {
    let mut extra = JsonMap::new();
    extra.insert("categoryId".into(), category.database_id.into());
    extra.insert("categoryName".into(), category.name.clone().into());

    paginate(
        &category.post_ids,
        config.per_page,
        &RoutePath::new(&category.uri),
        Template::CategoryList,
        &extra,
    )
}

/// Posts that pass the malformed-descriptor policy.
fn checked_posts<'a>(
    posts: &'a [PostDescriptor],
    config: &RoutingConfig,
) -> Result<Vec<&'a PostDescriptor>, RouteError> {
    let mut kept = Vec::with_capacity(posts.len());
    for (index, post) in posts.iter().enumerate() {
        if post.is_well_formed() {
            kept.push(post);
        } else {
            malformed(config, "post", index, "missing uri")?;
        }
    }
    Ok(kept)
}

/// Handle a malformed descriptor per policy: warn-and-skip or abort.
fn malformed(
    config: &RoutingConfig,
    kind: &'static str,
    index: usize,
    detail: &str,
) -> Result<(), RouteError> {
    match config.on_malformed {
        MalformedPolicy::Skip => {
            log!("warning"; "skipping malformed {kind} descriptor at index {index}: {detail}");
            Ok(())
        }
        MalformedPolicy::Fail => Err(RouteError::Malformed {
            kind,
            index,
            detail: detail.into(),
        }),
    }
}

fn opt_id(id: Option<u64>) -> JsonValue {
    id.map_or(JsonValue::Null, Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use crate::planner::links::link_adjacent;

    fn snapshot() -> QuerySnapshot {
        let mut posts = vec![
            PostDescriptor::new("/third-post/", 30),
            PostDescriptor::new("/second-post/", 20),
            PostDescriptor::new("/first-post/", 10),
        ];
        link_adjacent(&mut posts);

        QuerySnapshot {
            pages: vec![
                PageDescriptor::new("/", 1),
                PageDescriptor::new("/about/", 2),
            ],
            posts,
            categories: vec![
                CategoryDescriptor::new("/news", 4, "News", vec![30, 20, 10, 5, 3]),
                CategoryDescriptor::new("/sports", 5, "Sports", vec![8, 6, 2]),
            ],
        }
    }

    fn plan(snapshot: &QuerySnapshot) -> Vec<RouteDescriptor> {
        plan_snapshot(snapshot, &RoutingConfig::default()).unwrap()
    }

    fn paths_of<'a>(routes: &'a [RouteDescriptor], template: Template) -> Vec<&'a str> {
        routes
            .iter()
            .filter(|r| r.template == template)
            .map(|r| r.path.as_str())
            .collect()
    }

    #[test]
    fn test_one_route_per_page_in_order() {
        let routes = plan(&snapshot());
        let pages = paths_of(&routes, Template::Page);
        assert_eq!(pages, vec!["/", "/about/"]);

        let about = routes.iter().find(|r| r.path == "/about/").unwrap();
        assert_eq!(about.context["databaseId"], 2);
    }

    #[test]
    fn test_post_routes_prefixed_with_adjacency() {
        let routes = plan(&snapshot());
        let posts = paths_of(&routes, Template::Post);
        assert_eq!(
            posts,
            vec!["/posts/third-post/", "/posts/second-post/", "/posts/first-post/"]
        );

        let newest = routes.iter().find(|r| r.path == "/posts/third-post/").unwrap();
        assert!(newest.context["nextId"].is_null());
        assert_eq!(newest.context["previousId"], 20);

        let middle = routes.iter().find(|r| r.path == "/posts/second-post/").unwrap();
        assert_eq!(middle.context["nextId"], 30);
        assert_eq!(middle.context["previousId"], 10);

        let oldest = routes.iter().find(|r| r.path == "/posts/first-post/").unwrap();
        assert_eq!(oldest.context["nextId"], 20);
        assert!(oldest.context["previousId"].is_null());
    }

    #[test]
    fn test_post_listing_at_prefix() {
        let routes = plan(&snapshot());
        let listing = paths_of(&routes, Template::PostList);
        assert_eq!(listing, vec!["/posts"]);

        let page = routes.iter().find(|r| r.template == Template::PostList).unwrap();
        let items = page.context["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["databaseId"], 30);
    }

    #[test]
    fn test_category_listings_paginated() {
        let routes = plan(&snapshot());
        let listings = paths_of(&routes, Template::CategoryList);
        assert_eq!(listings, vec!["/news", "/news/2", "/sports"]);

        let news_first = routes.iter().find(|r| r.path == "/news").unwrap();
        assert_eq!(news_first.context["items"].as_array().unwrap().len(), 4);
        assert_eq!(news_first.context["categoryId"], 4);
        assert_eq!(news_first.context["categoryName"], "News");

        let news_second = routes.iter().find(|r| r.path == "/news/2").unwrap();
        let overflow = news_second.context["items"].as_array().unwrap();
        assert_eq!(overflow.len(), 1);
        assert_eq!(overflow[0], 3);
        assert_eq!(news_second.context["categoryName"], "News");

        let sports = routes.iter().find(|r| r.path == "/sports").unwrap();
        assert_eq!(sports.context["items"].as_array().unwrap().len(), 3);
        assert_eq!(sports.context["categoryId"], 5);
    }

    #[test]
    fn test_output_ordering() {
        let routes = plan(&snapshot());
        let templates: Vec<Template> = routes.iter().map(|r| r.template).collect();
        assert_eq!(
            templates,
            vec![
                Template::Page,
                Template::Page,
                Template::Post,
                Template::Post,
                Template::Post,
                Template::PostList,
                Template::CategoryList,
                Template::CategoryList,
                Template::CategoryList,
            ]
        );
    }

    #[test]
    fn test_query_failure_emits_no_routes() {
        let result = QueryResult::failed(["error loading events"]);
        let err = plan_routes(&result, &RoutingConfig::default()).unwrap_err();

        assert!(matches!(err, RouteError::Query(_)));
        assert!(err.to_string().contains("error loading events"));
    }

    #[test]
    fn test_empty_snapshot_plans_nothing() {
        let routes = plan(&QuerySnapshot::default());
        assert!(routes.is_empty());
    }

    #[test]
    fn test_malformed_skip_drops_single_item() {
        let mut snapshot = snapshot();
        snapshot.posts[1].uri = String::new();

        let routes = plan(&snapshot);
        let posts = paths_of(&routes, Template::Post);
        assert_eq!(posts, vec!["/posts/third-post/", "/posts/first-post/"]);

        // The listing sees the same filtered set
        let listing = routes.iter().find(|r| r.template == Template::PostList).unwrap();
        assert_eq!(listing.context["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_fail_aborts_pass() {
        let mut bad = snapshot();
        bad.pages[0].uri = String::new();

        let config = RoutingConfig {
            on_malformed: MalformedPolicy::Fail,
            ..Default::default()
        };
        let err = plan_snapshot(&bad, &config).unwrap_err();
        assert!(matches!(
            err,
            RouteError::Malformed { kind: "page", index: 0, .. }
        ));
    }

    #[test]
    fn test_duplicate_warn_keeps_all_routes() {
        let mut snapshot = QuerySnapshot::default();
        snapshot.pages = vec![
            PageDescriptor::new("/about/", 1),
            PageDescriptor::new("/about/", 2),
        ];

        let routes = plan(&snapshot);
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_duplicate_reject_aborts_pass() {
        let mut snapshot = QuerySnapshot::default();
        snapshot.pages = vec![
            PageDescriptor::new("/about/", 1),
            PageDescriptor::new("/about/", 2),
        ];

        let config = RoutingConfig {
            on_duplicate: DuplicatePolicy::Reject,
            ..Default::default()
        };
        let err = plan_snapshot(&snapshot, &config).unwrap_err();
        assert!(matches!(err, RouteError::Conflicts(_)));
    }

    #[test]
    fn test_custom_prefix_and_page_size() {
        let config = RoutingConfig::from_toml_str("posts-prefix = \"/blog\"\nper-page = 2").unwrap();

        let routes = plan_snapshot(&snapshot(), &config).unwrap();
        assert!(routes.iter().any(|r| r.path == "/blog/third-post/"));

        let listing = paths_of(&routes, Template::PostList);
        assert_eq!(listing, vec!["/blog", "/blog/2"]);
    }
}
