//! Typed REST endpoints of the rental API.
//!
//! Thin wrappers over [`ApiClient`] so pages never spell out paths.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tokio_util::sync::CancellationToken;

use super::error::ApiError;
use super::http::ApiClient;
use super::transport::Transport;
use super::types::Item;
use crate::state::token_store::TokenStore;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/auth/signup";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";
pub const CURRENT_USER_ENDPOINT: &str = "/users/me";
pub const ITEMS_ENDPOINT: &str = "/items";

fn item_endpoint(id: &str) -> String {
    format!("{ITEMS_ENDPOINT}/{}", urlencoding::encode(id))
}

/// Fetch every listing. A `null` body is treated as an empty list.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn fetch_items<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    cancel: &CancellationToken,
) -> Result<Vec<Item>, ApiError> {
    let items: Option<Vec<Item>> = client.get_cancellable(ITEMS_ENDPOINT, cancel).await?;
    Ok(items.unwrap_or_default())
}

/// Fetch one listing by id.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown ids, otherwise the request failure.
pub async fn fetch_item<T: Transport, S: TokenStore>(
    client: &ApiClient<T, S>,
    id: &str,
    cancel: &CancellationToken,
) -> Result<Item, ApiError> {
    client.get_cancellable(&item_endpoint(id), cancel).await
}
