//! HTTP DTOs for the contact endpoint.

use serde::Deserialize;

use crate::domain::contact::ContactFormStatus;

/// Request body for `POST /api/contact`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// Form status before this submit; `error` marks a retry.
    #[serde(default)]
    pub status: ContactFormStatus,
}
