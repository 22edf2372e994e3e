//! JSON Invoker Port - send a request and get back a parsed JSON body.
//!
//! Implementations decide how hard to try; callers only see the body or
//! `RetryExhausted`.

use async_trait::async_trait;

use super::http_transport::OutboundRequest;

/// Port for calling a JSON HTTP endpoint.
#[async_trait]
pub trait JsonInvoker: Send + Sync {
    /// Performs the request and returns the parsed JSON response body.
    async fn invoke(&self, request: &OutboundRequest) -> Result<serde_json::Value, InvokeError>;
}

/// Errors that cross the invoker boundary.
///
/// Per-attempt faults are absorbed and logged by the invoker; only the
/// final verdict is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    #[error("all retries failed to connect to the API")]
    RetryExhausted,

    /// The request payload could not be built; nothing was sent.
    #[error("failed to encode request: {0}")]
    Encoding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_exhausted_displays_generic_text() {
        assert_eq!(
            InvokeError::RetryExhausted.to_string(),
            "all retries failed to connect to the API"
        );
    }
}
