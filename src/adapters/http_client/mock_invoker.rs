//! Mock JSON invoker for testing code that sits on top of the invoker.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{InvokeError, JsonInvoker, OutboundRequest};

/// Mock invoker returning scripted bodies or errors in order.
///
/// Once the script is empty every call returns `{}`.
#[derive(Debug, Clone, Default)]
pub struct MockInvoker {
    results: Arc<Mutex<VecDeque<Result<serde_json::Value, InvokeError>>>>,
    calls: Arc<Mutex<Vec<OutboundRequest>>>,
}

impl MockInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful body.
    pub fn with_body(self, body: serde_json::Value) -> Self {
        self.results.lock().unwrap().push_back(Ok(body));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: InvokeError) -> Self {
        self.results.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded requests.
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonInvoker for MockInvoker {
    async fn invoke(&self, request: &OutboundRequest) -> Result<serde_json::Value, InvokeError> {
        self.calls.lock().unwrap().push(request.clone());

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({})))
    }
}
