//! Retrying Invoker - JsonInvoker with fixed exponential backoff.
//!
//! Every failure is retried the same way: non-2xx statuses (4xx included),
//! transport faults, and 2xx bodies that are not JSON. Attempt failures are
//! logged and swallowed; the caller only ever sees the parsed body or
//! `RetryExhausted`.
//!
//! # Example
//!
//! ```ignore
//! let transport = ReqwestTransport::new(Duration::from_secs(30))?;
//! let invoker = RetryingInvoker::new(transport, RetryPolicy::default());
//!
//! let body = invoker.invoke(&OutboundRequest::post_json(url, payload)).await?;
//! ```

use async_trait::async_trait;
use tokio::time::sleep;

use crate::ports::{HttpTransport, InvokeError, JsonInvoker, OutboundRequest, TransportError};

use super::retry_policy::RetryPolicy;

/// Why a single attempt did not produce a body.
#[derive(Debug, thiserror::Error)]
enum AttemptFault {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("response body is not valid JSON: {0}")]
    Body(String),
}

/// Invoker that retries a request according to a `RetryPolicy`.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
pub struct RetryingInvoker<T: HttpTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: HttpTransport> RetryingInvoker<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    async fn attempt(&self, request: &OutboundRequest) -> Result<serde_json::Value, AttemptFault> {
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(AttemptFault::Status {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| AttemptFault::Body(e.to_string()))
    }
}

#[async_trait]
impl<T: HttpTransport> JsonInvoker for RetryingInvoker<T> {
    async fn invoke(&self, request: &OutboundRequest) -> Result<serde_json::Value, InvokeError> {
        let max_attempts = self.policy.max_attempts;

        for attempt in 0..max_attempts {
            match self.attempt(request).await {
                Ok(body) => {
                    if attempt > 0 {
                        tracing::debug!(attempt = attempt + 1, "Request succeeded after retry");
                    }
                    return Ok(body);
                }
                Err(fault) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_attempts,
                        url = %request.url,
                        error = %fault,
                        "Attempt {} failed",
                        attempt + 1
                    );
                }
            }

            // Runs after the last attempt too; exhaustion takes the full schedule.
            sleep(self.policy.delay_for_attempt(attempt)).await;
        }

        tracing::error!(max_attempts, url = %request.url, "All retries failed");
        Err(InvokeError::RetryExhausted)
    }
}
