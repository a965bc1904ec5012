//! Network seam for the REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`](super::http::ApiClient) decides *what* to send; a
//! [`Transport`] decides *how*. In the browser (hydrate) that is `gloo-net`
//! over `fetch()` with an `AbortController` wired to the request's
//! [`CancellationToken`]. During SSR there is no session to speak for, so the
//! transport fails fast with a network error.

#![allow(clippy::unused_async)]

use tokio_util::sync::CancellationToken;

use super::error::ApiError;

/// HTTP method subset used by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential for the `Authorization` header, if any.
    pub bearer: Option<String>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Value of the `Authorization` header this request carries.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests. Failures that never produced a response are reported as
/// [`ApiError::Network`]; a fired cancel token yields [`ApiError::Cancelled`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest, cancel: Option<&CancellationToken>) -> Result<ApiResponse, ApiError>;
}

/// `fetch()`-backed transport used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest, cancel: Option<&CancellationToken>) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let controller = web_sys::AbortController::new()
                .map_err(|_| ApiError::Network("AbortController unavailable".to_owned()))?;
            let authorization = request.authorization();
            let ApiRequest { method, url, body, .. } = request;

            let mut builder = match method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
            };
            builder = builder.abort_signal(Some(&controller.signal()));
            if let Some(value) = &authorization {
                builder = builder.header("Authorization", value);
            }

            let fetch = async move {
                let response = match body {
                    Some(body) => builder.header("Content-Type", "application/json").body(body)?.send().await?,
                    None => builder.send().await?,
                };
                let status = response.status();
                let body = response.text().await?;
                Ok::<_, gloo_net::Error>(ApiResponse { status, body })
            };

            let Some(cancel) = cancel else {
                return fetch.await.map_err(|e| ApiError::Network(e.to_string()));
            };
            if cancel.is_cancelled() {
                return Err(ApiError::Cancelled);
            }
            let fetch = std::pin::pin!(fetch);
            let cancelled = std::pin::pin!(cancel.cancelled());
            match select(fetch, cancelled).await {
                Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
                Either::Right(((), _)) => {
                    controller.abort();
                    Err(ApiError::Cancelled)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, cancel);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
