//! HTTP adapter for quiz endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::quiz_routes;
