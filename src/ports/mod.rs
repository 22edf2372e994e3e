//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Outbound HTTP
//!
//! - `HttpTransport` - One HTTP exchange, no retries
//! - `JsonInvoker` - Request → parsed JSON body, retries hidden inside
//! - `ReplyGenerator` - Prompt → acknowledgment text
//!
//! ## Storage
//!
//! - `PreferenceStore` - Key-value visitor preferences

mod http_transport;
mod json_invoker;
mod preference_store;
mod reply_generator;

pub use http_transport::{HttpResponse, HttpTransport, OutboundRequest, TransportError};
pub use json_invoker::{InvokeError, JsonInvoker};
pub use preference_store::{PreferenceError, PreferenceStore};
pub use reply_generator::ReplyGenerator;
