//! HTTP handlers for compatibility endpoints.
//!
//! Codes are validated at this boundary; an unknown code is a 400 rather
//! than the neutral fallback the engine uses internally.

use axum::extract::{Json, Query, State};

use crate::application::handlers::{
    CompareMbtiQuery, LookupPairingQuery, PairTable, PairingLookup,
};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    DrivesCompareRequest, DrivesCompareResponse, MbtiCompatibilityResponse,
    MbtiInteractionResponse, PairQuery,
};

fn mbti_query(q: PairQuery) -> CompareMbtiQuery {
    CompareMbtiQuery { a: q.a, b: q.b }
}

/// GET /api/mbti/compatibility?a=&b=
pub async fn mbti_compatibility(
    State(state): State<AppState>,
    Query(query): Query<PairQuery>,
) -> Result<Json<MbtiCompatibilityResponse>, ApiError> {
    let comparison = state.compare_mbti_handler().handle(mbti_query(query))?;
    Ok(Json(MbtiCompatibilityResponse::from(&comparison)))
}

/// GET /api/mbti/interaction?a=&b=
pub async fn mbti_interaction(
    State(state): State<AppState>,
    Query(query): Query<PairQuery>,
) -> Result<Json<MbtiInteractionResponse>, ApiError> {
    let comparison = state.compare_mbti_handler().handle(mbti_query(query))?;
    Ok(Json(MbtiInteractionResponse::from(comparison)))
}

fn lookup(state: &AppState, table: PairTable, q: PairQuery) -> Result<PairingLookup, ApiError> {
    let query = LookupPairingQuery {
        table,
        a: q.a,
        b: q.b,
    };
    Ok(state.lookup_pairing_handler().handle(query)?)
}

/// GET /api/disc/pairing?a=&b=
pub async fn disc_pairing(
    State(state): State<AppState>,
    Query(query): Query<PairQuery>,
) -> Result<Json<PairingLookup>, ApiError> {
    lookup(&state, PairTable::Disc, query).map(Json)
}

/// GET /api/enneagram/pairing?a=&b=
pub async fn enneagram_pairing(
    State(state): State<AppState>,
    Query(query): Query<PairQuery>,
) -> Result<Json<PairingLookup>, ApiError> {
    lookup(&state, PairTable::Enneagram, query).map(Json)
}

/// POST /api/drives/compare - Visitor drives against the owner's
pub async fn drives_compare(
    State(state): State<AppState>,
    Json(request): Json<DrivesCompareRequest>,
) -> Json<DrivesCompareResponse> {
    Json(DrivesCompareResponse {
        comparisons: state.compare_drives_handler().handle(&request.visitor),
    })
}
