//! Listing data for the home and detail pages.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use crate::net::error::ApiError;
use crate::net::types::Item;

/// Outcome of a page-level fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> FetchState<T> {
    /// Map a fetch result to view state. Cancelled fetches yield `None`: the
    /// page that started them is gone and nothing should be written.
    pub fn from_result(result: Result<T, ApiError>) -> Option<Self> {
        match result {
            Ok(value) => Some(Self::Ready(value)),
            Err(ApiError::Cancelled) => None,
            Err(e) if e.is_not_found() => Some(Self::NotFound),
            Err(e) => Some(Self::Failed(e.to_string())),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Items whose name or category contains `query`, case-insensitively.
///
/// A blank query keeps every item. Order is preserved.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item
                    .category
                    .as_deref()
                    .is_some_and(|category| category.to_lowercase().contains(&needle))
        })
        .collect()
}
