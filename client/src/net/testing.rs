//! Scripted transport for exercising the client without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use super::cancel::LatestRequest;
use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Replays queued outcomes in order and records every request it sees.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    outcomes: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    supersede: Arc<Mutex<Option<LatestRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.outcomes.lock().unwrap().push_back(Err(err));
        self
    }

    /// Start a newer request on `latest` while each send is in flight, as a
    /// route change or retry would.
    pub fn supersede_on_send(&self, latest: &LatestRequest) -> &Self {
        *self.supersede.lock().unwrap() = Some(latest.clone());
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest, cancel: Option<&CancellationToken>) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        if let Some(latest) = self.supersede.lock().unwrap().as_ref() {
            let _ = latest.begin();
        }
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(ApiError::Cancelled);
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response scripted".to_owned())))
    }
}
