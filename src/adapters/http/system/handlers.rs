//! Health and site metadata handlers.

use axum::extract::{Json, State};
use serde::Serialize;

use crate::config::SiteInfo;

use super::super::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/site - Title, description, and dashboard embed URLs
pub async fn site(State(state): State<AppState>) -> Json<SiteInfo> {
    Json(state.site.as_ref().clone())
}
