//! HTTP routes for preference endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_theme, toggle_theme, PreferenceHandlers};

/// Creates the preferences router.
pub fn preference_routes(handlers: PreferenceHandlers) -> Router {
    Router::new()
        .route("/theme", get(get_theme))
        .route("/theme/toggle", post(toggle_theme))
        .with_state(handlers)
}
