//! HTTP routes for the contact endpoint.

use axum::{routing::post, Router};

use super::handlers::{submit_contact, ContactHandlers};

/// Creates the contact router.
pub fn contact_routes(handlers: ContactHandlers) -> Router {
    Router::new()
        .route("/", post(submit_contact))
        .with_state(handlers)
}
