//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http_client` - Outbound transport and the retrying JSON invoker
//! - `gemini` - Reply generation over the Gemini API
//! - `preferences` - Preference stores (in-memory, YAML file)
//! - `http` - Inbound REST API (axum)

pub mod gemini;
pub mod http;
pub mod http_client;
pub mod preferences;

pub use gemini::{GeminiConfig, GeminiReplyGenerator};
pub use http_client::{MockInvoker, MockTransport, ReqwestTransport, RetryPolicy, RetryingInvoker};
pub use preferences::{FilePreferenceStore, InMemoryPreferenceStore};
