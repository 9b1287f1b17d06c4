use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::error::RequestError;
use crate::request::{ApiRequest, Transport};

/// Scripted Transport for tests: replays queued responses in order and keeps
/// every request it was asked to send.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    responses: Arc<Mutex<VecDeque<Result<Value, RequestError>>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response.
    pub fn respond_with(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    /// Queue a failure.
    pub fn fail_with(&self, error: RequestError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Requests sent so far, oldest first.
    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, RequestError> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Transport("no response queued".into())))
    }
}
