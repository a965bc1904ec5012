//! Build-time client configuration.
//!
//! The API host is baked into the WASM bundle from the `API_BASE_URL`
//! environment variable at compile time, falling back to a local backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend address used when `API_BASE_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Versioned prefix shared by every REST endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// API base URL configured for this build.
pub fn api_base_url() -> String {
    resolve_api_base_url(option_env!("API_BASE_URL"))
}

/// Normalize a raw base URL: trims whitespace and trailing slashes, and
/// falls back to [`DEFAULT_API_BASE_URL`] when empty.
pub fn resolve_api_base_url(raw: Option<&str>) -> String {
    let base = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if base.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        base.to_owned()
    }
}
