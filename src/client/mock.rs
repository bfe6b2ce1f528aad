//! Mock transport for testing
//!
//! Records every request and answers from a queue of canned responses,
//! without touching the network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::models::{ApiKey, RawResponse};
use super::transport::{RequestBody, Transport};
use crate::error::{ApiError, Result};

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub endpoint: String,
    pub api_key: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Body decoded as JSON (plain query requests only)
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("captured body is JSON")
    }
}

/// Canned outcome for one call
enum MockResponse {
    Body(String),
    Rejected { status: u16, body: String },
}

/// Mock transport for testing.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new().with_body(r#"{"data":{}}"#);
/// let client = ScanClient::with_transport(mock.clone());
/// client.check_subscriptions(ENDPOINT, &key).await?;
/// assert_eq!(mock.requests().await.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Returned once the queue is empty
    fallback: Arc<Mutex<Option<String>>>,
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body
    pub fn with_body(self, body: &str) -> Self {
        self.push(MockResponse::Body(body.to_string()));
        self
    }

    /// Queue a rejection
    pub fn with_rejection(self, status: u16, body: &str) -> Self {
        self.push(MockResponse::Rejected {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Body returned for every call once queued responses run out
    pub fn with_fallback(self, body: &str) -> Self {
        *self.fallback.try_lock().expect("mock not shared yet") = Some(body.to_string());
        self
    }

    fn push(&self, response: MockResponse) {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .push_back(response);
    }

    /// All captured requests, in call order
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        body: RequestBody,
    ) -> Result<RawResponse> {
        self.captured_requests.lock().await.push(CapturedRequest {
            endpoint: endpoint.to_string(),
            api_key: api_key.expose().to_string(),
            content_type: body.content_type,
            body: body.bytes,
        });

        let next = self.responses.lock().await.pop_front();
        match next {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Rejected { status, body }) => {
                Err(ApiError::Rejected { status, body }.into())
            }
            None => match self.fallback.lock().await.clone() {
                Some(body) => Ok(body),
                None => Err(ApiError::Network("MockTransport: no response queued".to_string()).into()),
            },
        }
    }
}
