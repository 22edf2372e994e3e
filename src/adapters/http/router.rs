//! Top-level router and middleware stack.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{SubmitContactHandler, ThemeHandler};
use crate::config::ServerConfig;

use super::contact::{contact_routes, ContactHandlers};
use super::health::health;
use super::navigation::navigation_routes;
use super::preferences::{preference_routes, PreferenceHandlers};
use super::resume::{resume_routes, ResumeFile};

/// Everything the HTTP surface needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub contact: ContactHandlers,
    pub preferences: PreferenceHandlers,
    pub resume: ResumeFile,
}

impl AppState {
    pub fn new(
        submit_handler: Arc<SubmitContactHandler>,
        theme_handler: Arc<ThemeHandler>,
        resume: ResumeFile,
    ) -> Self {
        Self {
            contact: ContactHandlers::new(submit_handler),
            preferences: PreferenceHandlers::new(theme_handler),
            resume,
        }
    }
}

/// Builds the application router.
///
/// Routes:
/// - `POST /api/contact`
/// - `GET  /api/preferences/theme`
/// - `POST /api/preferences/theme/toggle`
/// - `POST /api/navigation/active-section`
/// - `GET  /api/resume`
/// - `GET  /health`
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/contact", contact_routes(state.contact))
        .nest("/preferences", preference_routes(state.preferences))
        .nest("/navigation", navigation_routes())
        .nest("/resume", resume_routes(state.resume));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(&server.cors_origins_list())),
        )
}

/// Allows the configured origins; with none configured, no cross-origin access.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
