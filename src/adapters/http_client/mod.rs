//! Outbound HTTP adapters.
//!
//! - `ReqwestTransport` - Real HTTP via reqwest
//! - `RetryingInvoker` - JsonInvoker with exponential backoff over any transport
//! - `MockTransport` / `MockInvoker` - Scripted doubles for tests

mod mock_invoker;
mod mock_transport;
mod reqwest_transport;
mod retry_policy;
mod retrying_invoker;

pub use mock_invoker::MockInvoker;
pub use mock_transport::{MockReply, MockTransport};
pub use reqwest_transport::ReqwestTransport;
pub use retry_policy::{RetryPolicy, BACKOFF_MULTIPLIER};
pub use retrying_invoker::RetryingInvoker;
