//! Registry client trait and the in-memory mock used by tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{NavError, Result};

/// Read access to the integration registry.
///
/// Both calls hand back raw JSON; shape validation happens in the fetcher.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Integrations installed for the configured account and user
    async fn list_installations(&self) -> Result<Value>;

    /// Configuration document for a single integration
    async fn app_configuration(&self, app_id: &str) -> Result<Value>;
}

/// A canned reply for the mock client
#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(Value),
    Status(u16),
}

impl MockResponse {
    fn into_result(self) -> Result<Value> {
        match self {
            MockResponse::Json(value) => Ok(value),
            MockResponse::Status(status) => Err(NavError::Api {
                status,
                message: "mock failure".to_string(),
            }),
        }
    }
}

/// Mock registry that replays queued responses in call order.
///
/// When the detail queue runs dry the fallback response is returned, which
/// defaults to an empty JSON array.
pub struct MockRegistryClient {
    list: MockResponse,
    details: Mutex<VecDeque<MockResponse>>,
    fallback: MockResponse,
    requested: Mutex<Vec<String>>,
}

impl MockRegistryClient {
    pub fn new(list: Value) -> Self {
        Self {
            list: MockResponse::Json(list),
            details: Mutex::new(VecDeque::new()),
            fallback: MockResponse::Json(Value::Array(Vec::new())),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Make the list call fail with the given HTTP status
    pub fn failing_list(status: u16) -> Self {
        Self {
            list: MockResponse::Status(status),
            ..Self::new(Value::Null)
        }
    }

    /// Queue the next detail response
    pub fn with_detail(self, detail: Value) -> Self {
        self.with_detail_response(MockResponse::Json(detail))
    }

    pub fn with_detail_response(self, response: MockResponse) -> Self {
        self.details
            .lock()
            .expect("mock detail queue poisoned")
            .push_back(response);
        self
    }

    /// Response for detail calls once the queue is empty
    pub fn with_fallback(mut self, fallback: Value) -> Self {
        self.fallback = MockResponse::Json(fallback);
        self
    }

    /// App ids passed to `app_configuration`, in call order
    pub fn requested_app_ids(&self) -> Vec<String> {
        self.requested
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }
}

#[async_trait]
impl RegistryClient for MockRegistryClient {
    async fn list_installations(&self) -> Result<Value> {
        self.list.clone().into_result()
    }

    async fn app_configuration(&self, app_id: &str) -> Result<Value> {
        self.requested
            .lock()
            .expect("mock request log poisoned")
            .push(app_id.to_string());

        let next = self
            .details
            .lock()
            .expect("mock detail queue poisoned")
            .pop_front();
        next.unwrap_or_else(|| self.fallback.clone()).into_result()
    }
}
