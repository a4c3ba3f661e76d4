//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own dto/handlers/routes module; `api_router` mounts
//! them all under `/api` next to `/health`.

pub mod chart;
pub mod compatibility;
pub mod contact;
pub mod error;
pub mod insights;
pub mod quiz;
pub mod state;
pub mod system;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::{routing::get, Router};

/// Complete API router with state applied.
///
/// ```ignore
/// let app = api_router(state).layer(TraceLayer::new_for_http());
/// ```
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(insights::insights_routes())
        .merge(compatibility::compatibility_routes())
        .merge(quiz::quiz_routes())
        .merge(chart::chart_routes())
        .merge(contact::contact_routes())
        .route("/site", get(system::site));

    Router::new()
        .route("/health", get(system::health))
        .nest("/api", api)
        .with_state(state)
}
