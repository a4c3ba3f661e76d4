//! Health check and site metadata.

pub mod handlers;

pub use handlers::{health, site, HealthResponse};
