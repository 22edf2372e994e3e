//! Integration tests for the HTTP surface.
//!
//! The full router is driven with `oneshot`, with the reply generator
//! running over a scripted invoker.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use portfolio_contact::adapters::http::resume::ResumeFile;
use portfolio_contact::adapters::http::{app_router, AppState};
use portfolio_contact::adapters::http_client::MockReply;
use portfolio_contact::adapters::{
    GeminiConfig, GeminiReplyGenerator, InMemoryPreferenceStore, MockInvoker, MockTransport,
    RetryPolicy, RetryingInvoker,
};
use portfolio_contact::application::{SubmitContactHandler, ThemeHandler};
use portfolio_contact::config::{AiConfig, RetryConfig, ServerConfig};
use portfolio_contact::domain::contact::FAILURE_MESSAGE;
use portfolio_contact::ports::{InvokeError, JsonInvoker, TransportError};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    invoker: MockInvoker,
    _dir: TempDir,
}

fn test_app(invoker: MockInvoker) -> TestApp {
    test_app_with_resume(invoker, None)
}

fn test_app_with_resume(invoker: MockInvoker, resume: Option<&[u8]>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let resume_path = dir.path().join("Resume.pdf");
    if let Some(bytes) = resume {
        std::fs::write(&resume_path, bytes).unwrap();
    }

    TestApp {
        router: router_over(Arc::new(invoker.clone()), ResumeFile::new(resume_path)),
        invoker,
        _dir: dir,
    }
}

/// Wires the router the way `main` does, with default server settings.
fn router_over(invoker: Arc<dyn JsonInvoker>, resume: ResumeFile) -> Router {
    let server = ServerConfig::default();
    let generator = GeminiReplyGenerator::new(GeminiConfig::new("test-key"), invoker);
    let submit = SubmitContactHandler::new(Arc::new(generator), "Test Owner")
        .with_deadline(server.submission_deadline());
    let state = AppState::new(
        Arc::new(submit),
        Arc::new(ThemeHandler::new(Arc::new(InMemoryPreferenceStore::new()))),
        resume,
    );

    app_router(state, &server)
}

fn reply_body(text: &str) -> Value {
    json!({ "candidates": [ { "content": { "parts": [ { "text": text } ] } } ] })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Contact
// =============================================================================

#[tokio::test]
async fn contact_success_returns_generated_reply() {
    let app = test_app(MockInvoker::new().with_body(reply_body("Thanks Alice!")));

    let response = app
        .router
        .oneshot(post_json(
            "/api/contact",
            json!({ "name": "Alice", "email": "a@x.com", "message": "Hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({ "isSubmitting": false, "message": "Thanks Alice!", "isError": false })
    );
    assert_eq!(app.invoker.call_count(), 1);
}

#[tokio::test]
async fn contact_failure_returns_generic_message_and_form() {
    let app = test_app(MockInvoker::new().with_error(InvokeError::RetryExhausted));

    let response = app
        .router
        .oneshot(post_json(
            "/api/contact",
            json!({ "name": "Alice", "email": "a@x.com", "subject": "Hello", "message": "Hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], json!(FAILURE_MESSAGE));
    assert_eq!(body["isError"], json!(true));
    assert_eq!(
        body["form"],
        json!({ "name": "Alice", "email": "a@x.com", "subject": "Hello", "message": "Hi" })
    );
}

#[tokio::test(start_paused = true)]
async fn contact_against_hanging_upstream_returns_failure_message_before_timeout() {
    let ai = AiConfig::default();
    let transport = MockTransport::failing(MockReply::fault(TransportError::Timeout {
        timeout_secs: ai.timeout_secs,
    }))
    .with_latency(ai.timeout());
    let invoker = RetryingInvoker::new(transport.clone(), RetryPolicy::from(&RetryConfig::default()));
    let router = router_over(Arc::new(invoker), ResumeFile::new("missing.pdf"));

    let start = tokio::time::Instant::now();
    let response = router
        .oneshot(post_json(
            "/api/contact",
            json!({ "name": "Alice", "email": "a@x.com", "message": "Hi" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(start.elapsed() < ServerConfig::default().request_timeout());
    let body = json_body(response).await;
    assert_eq!(body["message"], json!(FAILURE_MESSAGE));
    assert_eq!(body["isError"], json!(true));
    assert_eq!(body["form"]["message"], json!("Hi"));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn contact_with_empty_message_is_rejected_without_a_call() {
    let app = test_app(MockInvoker::new());

    let response = app
        .router
        .oneshot(post_json(
            "/api/contact",
            json!({ "name": "Alice", "email": "a@x.com", "message": "   " }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], json!("EMPTY_FIELD"));
    assert_eq!(body["details"]["field"], json!("message"));
    assert_eq!(app.invoker.call_count(), 0);
}

#[tokio::test]
async fn contact_with_missing_email_is_rejected() {
    let app = test_app(MockInvoker::new());

    let response = app
        .router
        .oneshot(post_json("/api/contact", json!({ "name": "Alice", "message": "Hi" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["details"]["field"], json!("email"));
}

// =============================================================================
// Preferences
// =============================================================================

#[tokio::test]
async fn theme_defaults_to_light_and_toggles() {
    let app = test_app(MockInvoker::new());

    let response = app.router.clone().oneshot(get("/api/preferences/theme")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "theme": "light" }));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/preferences/theme/toggle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(json_body(response).await, json!({ "theme": "dark" }));

    let response = app.router.oneshot(get("/api/preferences/theme")).await.unwrap();
    assert_eq!(json_body(response).await, json!({ "theme": "dark" }));
}

// =============================================================================
// Navigation
// =============================================================================

#[tokio::test]
async fn active_section_follows_scroll_position() {
    let app = test_app(MockInvoker::new());

    let response = app
        .router
        .oneshot(post_json(
            "/api/navigation/active-section",
            json!({
                "scrollY": 460.0,
                "viewportHeight": 800.0,
                "documentHeight": 4000.0,
                "sections": [
                    { "section": "about", "top": 0.0, "height": 600.0 },
                    { "section": "skills", "top": 600.0, "height": 400.0 }
                ],
                "current": "about"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "section": "skills" }));
}

#[tokio::test]
async fn active_section_at_page_bottom_is_contact() {
    let app = test_app(MockInvoker::new());

    let response = app
        .router
        .oneshot(post_json(
            "/api/navigation/active-section",
            json!({ "scrollY": 1200.0, "viewportHeight": 800.0, "documentHeight": 2000.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(json_body(response).await, json!({ "section": "contact" }));
}

// =============================================================================
// Resume and health
// =============================================================================

#[tokio::test]
async fn resume_is_served_as_attachment() {
    let app = test_app_with_resume(MockInvoker::new(), Some(b"%PDF-1.4 test"));

    let response = app.router.oneshot(get("/api/resume")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Resume.pdf\""
    );
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.4 test");
}

#[tokio::test]
async fn missing_resume_is_not_found() {
    let app = test_app(MockInvoker::new());

    let response = app.router.oneshot(get("/api/resume")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app(MockInvoker::new());

    let response = app.router.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], json!("ok"));
}
