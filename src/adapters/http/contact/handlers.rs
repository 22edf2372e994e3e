//! HTTP handlers for the contact endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::dto::ErrorResponse;
use crate::application::handlers::contact::SubmitContactHandler;
use crate::domain::contact::{ContactError, ContactForm};

use super::dto::{ContactRequest, ContactResponse};

#[derive(Clone)]
pub struct ContactHandlers {
    submit_handler: Arc<SubmitContactHandler>,
}

impl ContactHandlers {
    pub fn new(submit_handler: Arc<SubmitContactHandler>) -> Self {
        Self { submit_handler }
    }
}

/// POST /api/contact - Submit the contact form
///
/// Each request is a fresh form. Generation failures still answer 200 with
/// `isError: true`.
pub async fn submit_contact(
    State(handlers): State<ContactHandlers>,
    Json(req): Json<ContactRequest>,
) -> Response {
    let mut form = ContactForm::with_data(req.into());

    match handlers.submit_handler.handle(&mut form).await {
        Ok(state) => {
            let response = ContactResponse::new(state, form.data());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contact_error(e),
    }
}

fn handle_contact_error(error: ContactError) -> Response {
    let status = match &error {
        ContactError::Validation(_) => StatusCode::BAD_REQUEST,
        ContactError::AlreadySubmitting => StatusCode::CONFLICT,
        ContactError::InvalidTransition(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let mut body = ErrorResponse::new(error.code(), error.to_string());
    if let ContactError::Validation(ref validation) = error {
        body = body.with_details(serde_json::json!({ "field": validation.field() }));
    }

    (status, Json(body)).into_response()
}
