//! Slug derivation for article nodes.
//!
//! The ingestion-side half of route planning: each article node gets a
//! `slug` field derived from its source file location, visible to later
//! content queries. Derivation is per-node, idempotent, and shares no
//! state across nodes.

use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;

use super::{ContentNode, NodeKind};
use crate::config::RoutingConfig;
use crate::core::RoutePath;
use crate::debug;

/// Name of the derived field attached to article nodes.
pub const SLUG_FIELD: &str = "slug";

/// Derive the slug for an article node.
///
/// Returns the article prefix joined with the resolver's raw path, e.g.
/// `/articles` + `/my-post/` -> `/articles/my-post/`.
///
/// Returns `None` for nodes of any other kind (no-op, no error), and for
/// nodes whose source location cannot be resolved (non-fatal; the node is
/// left without the derived field).
pub fn derive_slug<R>(node: &ContentNode, resolver: R, config: &RoutingConfig) -> Option<RoutePath>
where
    R: Fn(&ContentNode) -> Option<String>,
{
    if !node.node_kind().is_some_and(NodeKind::is_article) {
        return None;
    }

    let Some(raw) = resolver(node) else {
        debug!("slug"; "no resolvable source path for {}", node.source_path.display());
        return None;
    };

    Some(config.article_prefix.join(&raw))
}

/// Attach the derived slug to a node's fields.
///
/// Returns whether a field was attached. Re-running on an already
/// annotated node recomputes the same value.
pub fn annotate<R>(node: &mut ContentNode, resolver: R, config: &RoutingConfig) -> bool
where
    R: Fn(&ContentNode) -> Option<String>,
{
    match derive_slug(node, resolver, config) {
        Some(slug) => {
            node.fields.insert(
                SLUG_FIELD.into(),
                serde_json::Value::String(slug.as_str().to_owned()),
            );
            true
        }
        None => false,
    }
}

/// Annotate a batch of nodes in parallel.
///
/// Node-level derivation has no ordering dependency and no shared mutable
/// state, so nodes are processed independently.
pub fn annotate_all<R>(nodes: &mut [ContentNode], resolver: R, config: &RoutingConfig)
where
    R: Fn(&ContentNode) -> Option<String> + Sync,
{
    nodes.par_iter_mut().for_each(|node| {
        annotate(node, &resolver, config);
    });
}

/// Resolver deriving the raw path from a node's location under a content
/// root: strips the root and extension, collapses `index` files into
/// their directory.
///
/// ```text
/// content/foo/my-post.md -> /foo/my-post/
/// content/foo/index.md   -> /foo/
/// ```
///
/// Resolution fails (returns `None`) only for nodes outside the root.
pub fn file_path_resolver(
    content_root: impl Into<PathBuf>,
) -> impl Fn(&ContentNode) -> Option<String> + Sync {
    let root: PathBuf = content_root.into();
    move |node| {
        let rel = node.source_path.strip_prefix(&root).ok()?;
        Some(raw_path_from_relative(rel))
    }
}

/// Build the raw path for a root-relative source file.
fn raw_path_from_relative(rel: &Path) -> String {
    let stem = rel.with_extension("");

    let mut raw = String::from("/");
    for component in stem.components() {
        if let Component::Normal(s) = component {
            let s = s.to_string_lossy();
            if s != "index" {
                raw.push_str(&s);
                raw.push('/');
            }
        }
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(path: impl Into<PathBuf>) -> ContentNode {
        ContentNode::new("article", path)
    }

    fn fixed(raw: &'static str) -> impl Fn(&ContentNode) -> Option<String> + Sync {
        move |_| Some(raw.to_owned())
    }

    #[test]
    fn test_derive_slug_prefixes_raw_path() {
        let config = RoutingConfig::default();
        let node = article("content/my-post.md");

        let slug = derive_slug(&node, fixed("/my-post/"), &config).unwrap();
        assert_eq!(slug, "/articles/my-post/");
    }

    #[test]
    fn test_derive_slug_ignores_other_kinds() {
        let config = RoutingConfig::default();
        for kind in ["page", "post", "category", "attachment"] {
            let node = ContentNode::new(kind, "content/my-post.md");
            assert!(derive_slug(&node, fixed("/my-post/"), &config).is_none());
        }
    }

    #[test]
    fn test_derive_slug_skips_unresolvable() {
        let config = RoutingConfig::default();
        let node = article("content/my-post.md");
        assert!(derive_slug(&node, |_| None, &config).is_none());
    }

    #[test]
    fn test_annotate_attaches_field() {
        let config = RoutingConfig::default();
        let mut node = article("content/my-post.md");

        assert!(annotate(&mut node, fixed("/my-post/"), &config));
        assert_eq!(
            node.field(SLUG_FIELD).and_then(|v| v.as_str()),
            Some("/articles/my-post/")
        );
    }

    #[test]
    fn test_annotate_idempotent() {
        let config = RoutingConfig::default();
        let mut node = article("content/my-post.md");

        annotate(&mut node, fixed("/my-post/"), &config);
        annotate(&mut node, fixed("/my-post/"), &config);

        assert_eq!(node.fields.len(), 1);
        assert_eq!(
            node.field(SLUG_FIELD).and_then(|v| v.as_str()),
            Some("/articles/my-post/")
        );
    }

    #[test]
    fn test_annotate_skip_leaves_node_untouched() {
        let config = RoutingConfig::default();
        let mut node = article("content/my-post.md");

        assert!(!annotate(&mut node, |_| None, &config));
        assert!(node.field(SLUG_FIELD).is_none());
    }

    #[test]
    fn test_annotate_all_parallel() {
        let config = RoutingConfig::default();
        let mut nodes: Vec<ContentNode> = (0..64)
            .map(|i| article(format!("content/post-{i}.md")))
            .collect();
        nodes.push(ContentNode::new("page", "content/about.md"));

        let root = PathBuf::from("content");
        annotate_all(&mut nodes, file_path_resolver(root), &config);

        for (i, node) in nodes.iter().take(64).enumerate() {
            assert_eq!(
                node.field(SLUG_FIELD).and_then(|v| v.as_str()),
                Some(format!("/articles/post-{i}/").as_str())
            );
        }
        // Non-article node stays unannotated
        assert!(nodes[64].field(SLUG_FIELD).is_none());
    }

    #[test]
    fn test_file_path_resolver_strips_root_and_extension() {
        let resolver = file_path_resolver("content");
        let node = article("content/foo/my-post.md");
        assert_eq!(resolver(&node).as_deref(), Some("/foo/my-post/"));
    }

    #[test]
    fn test_file_path_resolver_collapses_index() {
        let resolver = file_path_resolver("content");
        let node = article("content/foo/index.md");
        assert_eq!(resolver(&node).as_deref(), Some("/foo/"));

        let node = article("content/index.md");
        assert_eq!(resolver(&node).as_deref(), Some("/"));
    }

    #[test]
    fn test_file_path_resolver_outside_root() {
        let resolver = file_path_resolver("content");
        let node = article("drafts/my-post.md");
        assert!(resolver(&node).is_none());
    }

    #[test]
    fn test_file_path_resolver_absolute_paths() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("content");
        std::fs::create_dir_all(root.join("news")).unwrap();
        std::fs::write(root.join("news/launch.md"), "# launch").unwrap();

        let resolver = file_path_resolver(root.clone());
        let node = article(root.join("news/launch.md"));
        assert_eq!(resolver(&node).as_deref(), Some("/news/launch/"));
    }

    #[test]
    fn test_derived_slug_end_to_end() {
        let config = RoutingConfig::default();
        let mut node = article("content/news/launch.md");

        annotate(&mut node, file_path_resolver("content"), &config);
        assert_eq!(
            node.field(SLUG_FIELD).and_then(|v| v.as_str()),
            Some("/articles/news/launch/")
        );
    }
}
