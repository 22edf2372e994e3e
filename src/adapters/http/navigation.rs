//! Active-section endpoint.
//!
//! The page posts its scroll metrics and section layout; the response names
//! the section the navigation bar should highlight.

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::navigation::{ActiveSectionTracker, ScrollSnapshot, Section, SectionBounds};

/// Rendered position of one section.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionBoundsRequest {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// Request to resolve the highlighted section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSectionRequest {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    #[serde(default)]
    pub sections: Vec<SectionBoundsRequest>,
    /// Section highlighted before this scroll event.
    pub current: Option<Section>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActiveSectionResponse {
    pub section: Section,
}

impl ActiveSectionRequest {
    fn resolve(&self) -> Section {
        let mut tracker = ActiveSectionTracker::new();
        if let Some(current) = self.current {
            tracker.select(current);
        }

        let snapshot = ScrollSnapshot {
            scroll_y: self.scroll_y,
            viewport_height: self.viewport_height,
            document_height: self.document_height,
        };
        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|b| SectionBounds::new(b.section, b.top, b.height))
            .collect();

        tracker.on_scroll(snapshot, &bounds)
    }
}

/// Creates the navigation router.
pub fn navigation_routes() -> Router {
    Router::new().route("/active-section", post(resolve_active_section))
}

/// POST /api/navigation/active-section - Resolve the highlighted section
pub async fn resolve_active_section(
    Json(request): Json<ActiveSectionRequest>,
) -> Json<ActiveSectionResponse> {
    Json(ActiveSectionResponse {
        section: request.resolve(),
    })
}
