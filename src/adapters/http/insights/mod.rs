//! HTTP adapter for insight endpoints.
//!
//! - `GET /api/owner` - Owner profile
//! - `POST /api/insights` - Insight cards for a visitor profile

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::insights_routes;
