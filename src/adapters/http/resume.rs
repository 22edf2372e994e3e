//! Resume download endpoint.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::dto::ErrorResponse;

/// Location of the resume file served for download.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    path: Arc<PathBuf>,
}

impl ResumeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string())
    }

    fn content_type(&self) -> &'static str {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => "application/pdf",
            _ => "application/octet-stream",
        }
    }
}

/// Creates the resume router.
pub fn resume_routes(resume: ResumeFile) -> Router {
    Router::new()
        .route("/", get(download_resume))
        .with_state(resume)
}

/// GET /api/resume - Download the resume as an attachment
pub async fn download_resume(State(resume): State<ResumeFile>) -> Response {
    let bytes = match tokio::fs::read(resume.path()).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %resume.path().display(), "Resume file missing");
            return (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found("Resume")))
                .into_response();
        }
        Err(e) => {
            tracing::error!(path = %resume.path().display(), error = %e, "Failed to read resume");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to read resume")),
            )
                .into_response();
        }
    };

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        resume.file_name().replace('"', "")
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(resume.content_type())),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}
