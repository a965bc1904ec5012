//! Base-URL + bearer-token aware REST client.
//!
//! Every request goes to `<base>/api/v1<path>`. The stored credential token,
//! when present, is attached as `Authorization: Bearer <token>` at send
//! time, so a login or logout is picked up by the very next request.
//!
//! ERROR HANDLING
//! ==============
//! No retries and no backoff. Transport errors, non-2xx statuses and decode
//! failures come back as [`ApiError`] for the caller to handle.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::API_PREFIX;
use crate::state::token_store::TokenStore;

/// REST client over a [`Transport`] with credentials from a [`TokenStore`].
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    store: S,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: &str, transport: T, store: S) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), transport, store }
    }

    /// Absolute URL for an API path such as `/items/42`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// `GET` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = self.request(Method::Get, path, None, self.store.get());
        decode(self.transport.send(request, None).await?)
    }

    /// `GET` that is abandoned (and aborted in the browser) once `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`] if the token fired, otherwise as [`Self::get`].
    pub async fn get_cancellable<R: DeserializeOwned>(&self, path: &str, cancel: &CancellationToken) -> Result<R, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let request = self.request(Method::Get, path, None, self.store.get());
        let response = self.transport.send(request, Some(cancel)).await?;
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        decode(response)
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns the serialization, transport, status, or decode failure.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = self.request(Method::Post, path, Some(body), self.store.get());
        decode(self.transport.send(request, None).await?)
    }

    /// `POST` without a body, ignoring whatever the server returns on success.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::Post, path, None, self.store.get());
        let response = self.transport.send(request, None).await?;
        check_status(&response)
    }

    /// `GET` authorized with an explicit token instead of the stored one.
    ///
    /// Used to validate a freshly issued token before it is persisted.
    pub(crate) async fn get_with_token<R: DeserializeOwned>(&self, path: &str, token: &str) -> Result<R, ApiError> {
        let request = self.request(Method::Get, path, None, Some(token.to_owned()));
        decode(self.transport.send(request, None).await?)
    }

    fn request(&self, method: Method, path: &str, body: Option<String>, bearer: Option<String>) -> ApiRequest {
        ApiRequest { method, url: self.url(path), bearer, body }
    }
}

fn check_status(response: &ApiResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_status(response.status, &response.body))
    }
}

fn decode<R: DeserializeOwned>(response: ApiResponse) -> Result<R, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
