//! Per-page request supersession.
//!
//! Fetches carry a [`CancellationToken`]. A page keeps one [`LatestRequest`]
//! per data source: each effect run takes a fresh token from
//! [`LatestRequest::begin`], which cancels the run before it, and
//! `on_cleanup` calls [`LatestRequest::cancel`]. The browser transport aborts
//! the underlying `fetch()` when the token fires, and a cancelled fetch never
//! writes view state.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

/// Slot holding the token of the newest in-flight request. Clones share it.
#[derive(Clone, Debug, Default)]
pub struct LatestRequest {
    current: Arc<Mutex<Option<CancellationToken>>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the previous request, if any, and hand out a token for the next.
    pub fn begin(&self) -> CancellationToken {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = current.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        *current = Some(token.clone());
        token
    }

    /// Cancel the live request. Later [`Self::begin`] calls still work.
    pub fn cancel(&self) {
        if let Some(token) = self.current.lock().unwrap_or_else(PoisonError::into_inner).take() {
            token.cancel();
        }
    }
}
