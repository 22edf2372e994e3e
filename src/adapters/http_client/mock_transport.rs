//! Mock HTTP transport for testing.
//!
//! Replays scripted responses and faults in order, and records every request
//! with the (tokio) instant it was sent so backoff timing can be checked
//! under a paused clock.
//!
//! # Example
//!
//! ```ignore
//! let transport = MockTransport::new()
//!     .with_reply(MockReply::status(503))
//!     .with_json(200, json!({"ok": true}));
//!
//! let invoker = RetryingInvoker::new(transport.clone(), RetryPolicy::default());
//! invoker.invoke(&request).await?;
//! assert_eq!(transport.call_count(), 2);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

use crate::ports::{HttpResponse, HttpTransport, OutboundRequest, TransportError};

/// A scripted outcome for one request.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this response.
    Response(HttpResponse),
    /// Fail below HTTP.
    Fault(TransportError),
}

impl MockReply {
    /// A response with the given status and an empty JSON object body.
    pub fn status(status: u16) -> Self {
        MockReply::Response(HttpResponse::new(status, "{}"))
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockReply::Response(HttpResponse::new(status, body.to_string()))
    }

    pub fn fault(error: TransportError) -> Self {
        MockReply::Fault(error)
    }
}

/// Mock transport for testing.
#[derive(Debug, Clone)]
pub struct MockTransport {
    /// Scripted replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Reply used once the script runs out.
    fallback: MockReply,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<(Instant, OutboundRequest)>>>,
    /// Time each request takes before its reply is returned.
    latency: Duration,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Creates a transport that answers `200 {}` once its script is empty.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            fallback: MockReply::status(200),
            calls: Arc::new(Mutex::new(Vec::new())),
            latency: Duration::ZERO,
        }
    }

    /// Creates a transport that gives the same reply to every request.
    pub fn failing(reply: MockReply) -> Self {
        Self {
            fallback: reply,
            ..Self::new()
        }
    }

    /// Adds a reply to the queue.
    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Delays every reply by `latency`, like a slow upstream.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Adds a JSON response to the queue.
    pub fn with_json(self, status: u16, body: serde_json::Value) -> Self {
        self.with_reply(MockReply::json(status, body))
    }

    /// Returns the number of requests sent.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the instants at which requests were sent.
    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }

    /// Returns all recorded requests.
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }

    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<HttpResponse, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), request.clone()));

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.next_reply() {
            MockReply::Response(response) => Ok(response),
            MockReply::Fault(error) => Err(error),
        }
    }
}
