//! HTTP handlers for preference endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::ErrorResponse;
use crate::application::handlers::preferences::ThemeHandler;
use crate::domain::foundation::ErrorCode;
use crate::domain::preferences::Theme;
use crate::ports::PreferenceError;

use super::dto::ThemeResponse;

#[derive(Clone)]
pub struct PreferenceHandlers {
    theme_handler: Arc<ThemeHandler>,
}

impl PreferenceHandlers {
    pub fn new(theme_handler: Arc<ThemeHandler>) -> Self {
        Self { theme_handler }
    }
}

/// GET /api/preferences/theme - Read the current theme
pub async fn get_theme(State(handlers): State<PreferenceHandlers>) -> Response {
    theme_response(handlers.theme_handler.current().await)
}

/// POST /api/preferences/theme/toggle - Flip and persist the theme
pub async fn toggle_theme(State(handlers): State<PreferenceHandlers>) -> Response {
    theme_response(handlers.theme_handler.toggle().await)
}

fn theme_response(result: Result<Theme, PreferenceError>) -> Response {
    match result {
        Ok(theme) => (StatusCode::OK, Json(ThemeResponse::from(theme))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Preference storage failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    ErrorCode::StorageError,
                    "Failed to access preferences",
                )),
            )
                .into_response()
        }
    }
}
