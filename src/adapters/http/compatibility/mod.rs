//! HTTP adapter for compatibility endpoints.
//!
//! - `GET /api/mbti/compatibility`, `GET /api/mbti/interaction`
//! - `GET /api/disc/pairing`, `GET /api/enneagram/pairing`
//! - `POST /api/drives/compare`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::compatibility_routes;
