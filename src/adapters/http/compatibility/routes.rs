//! Axum router configuration for compatibility endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    disc_pairing, drives_compare, enneagram_pairing, mbti_compatibility, mbti_interaction,
};

/// # Routes
/// - `GET /mbti/compatibility` - Score and tier
/// - `GET /mbti/interaction` - Generated narrative and dichotomies
/// - `GET /disc/pairing` - DISC pair profile
/// - `GET /enneagram/pairing` - Enneagram pair profile
/// - `POST /drives/compare` - Per-drive comparison against the owner
pub fn compatibility_routes() -> Router<AppState> {
    Router::new()
        .route("/mbti/compatibility", get(mbti_compatibility))
        .route("/mbti/interaction", get(mbti_interaction))
        .route("/disc/pairing", get(disc_pairing))
        .route("/enneagram/pairing", get(enneagram_pairing))
        .route("/drives/compare", post(drives_compare))
}
