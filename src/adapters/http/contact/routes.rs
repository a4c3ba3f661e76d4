//! Axum router configuration for the contact endpoint.

use axum::{routing::post, Router};

use super::super::state::AppState;
use super::handlers::submit_contact;

/// # Routes
/// - `POST /contact` - Validate and relay a contact message
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}
