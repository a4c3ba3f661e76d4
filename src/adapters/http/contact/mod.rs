//! HTTP adapter for the contact form.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::contact_routes;
