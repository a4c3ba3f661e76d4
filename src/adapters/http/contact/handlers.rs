//! HTTP handlers for the contact endpoint.

use axum::extract::{Json, State};

use crate::application::handlers::{SubmitContactCommand, SubmitContactResult};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::ContactRequest;

/// POST /api/contact - Relay failures return 200 with status `error`
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<SubmitContactResult>, ApiError> {
    let cmd = SubmitContactCommand {
        name: request.name,
        email: request.email,
        message: request.message,
        previous: request.status,
    };
    let result = state.submit_contact_handler().handle(cmd).await?;
    Ok(Json(result))
}
