//! HTTP adapter for radial chart layouts.

pub mod handlers;
pub mod routes;

pub use routes::chart_routes;
