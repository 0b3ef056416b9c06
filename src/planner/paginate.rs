//! Generic pagination over an ordered item sequence.
//!
//! Implemented once and shared by the global post listing and each
//! category listing: page 1 lives at the bare prefix, pages >= 2 at
//! `prefix/<n>`.

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::route::{RouteDescriptor, Template};
use crate::core::{JsonMap, RoutePath};

/// Split `items` into listing routes of `per_page` items each.
///
/// Context fields on every generated route:
///
/// | Field              | Type           | Description                    |
/// |--------------------|----------------|--------------------------------|
/// | `items`            | array          | This page's slice, input order |
/// | `pageNumber`       | number         | 1-based, contiguous            |
/// | `pageCount`        | number         | `ceil(len / per_page)`         |
/// | `previousPagePath` | string or null | Null on the first page         |
/// | `nextPagePath`     | string or null | Null on the last page          |
///
/// `extra` is merged into every context. An empty item sequence yields
/// no routes; a trailing partial page keeps its remainder.
pub fn paginate<T: Serialize>(
    items: &[T],
    per_page: usize,
    prefix: &RoutePath,
    template: Template,
    extra: &JsonMap,
) -> Vec<RouteDescriptor> {
    if items.is_empty() || per_page == 0 {
        return Vec::new();
    }

    let page_count = items.len().div_ceil(per_page);
    let mut routes = Vec::with_capacity(page_count);

    for (index, slice) in items.chunks(per_page).enumerate() {
        let number = index + 1;

        let mut context = JsonMap::new();
        context.insert(
            "items".into(),
            serde_json::to_value(slice).unwrap_or_default(),
        );
        context.insert("pageNumber".into(), number.into());
        context.insert("pageCount".into(), page_count.into());
        context.insert(
            "previousPagePath".into(),
            match number {
                1 => JsonValue::Null,
                _ => prefix.join_page(number - 1).as_str().into(),
            },
        );
        context.insert(
            "nextPagePath".into(),
            if number == page_count {
                JsonValue::Null
            } else {
                prefix.join_page(number + 1).as_str().into()
            },
        );
        for (key, value) in extra {
            context.insert(key.clone(), value.clone());
        }

        routes.push(RouteDescriptor::new(
            prefix.join_page(number),
            template,
            context,
        ));
    }

    routes
}
