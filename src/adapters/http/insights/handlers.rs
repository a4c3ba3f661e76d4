//! HTTP handlers for insight and owner endpoints.

use axum::extract::{Json, State};

use crate::application::handlers::{GetInsightsQuery, GetInsightsResult};

use super::super::state::AppState;
use super::dto::{InsightsRequest, OwnerResponse};

/// GET /api/owner - The owner profile insights are built against
pub async fn get_owner(State(state): State<AppState>) -> Json<OwnerResponse> {
    Json(OwnerResponse::from(state.owner.as_ref()))
}

/// POST /api/insights - Insight cards for a visitor profile
pub async fn post_insights(
    State(state): State<AppState>,
    Json(request): Json<InsightsRequest>,
) -> Json<GetInsightsResult> {
    let query = GetInsightsQuery {
        visitor: request.visitor,
        dimension_set: request.dimension_set,
    };
    Json(state.insights_handler().handle(query))
}
