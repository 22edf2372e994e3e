//! Contact HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{ContactRequest, ContactResponse};
pub use handlers::ContactHandlers;
pub use routes::contact_routes;
