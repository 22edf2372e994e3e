//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module; `router` assembles them behind the shared
//! middleware stack.

pub mod contact;
pub mod dto;
pub mod health;
pub mod navigation;
pub mod preferences;
pub mod resume;
mod router;

pub use dto::ErrorResponse;
pub use router::{app_router, AppState};
