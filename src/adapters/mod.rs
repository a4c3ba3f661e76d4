//! Adapters - Implementations of port interfaces.
//!
//! - `contact` - Contact relay over HTTP, or in memory
//! - `http` - Axum REST API

pub mod contact;
pub mod http;

pub use contact::{HttpContactRelay, HttpRelayConfig, InMemoryContactRelay};
pub use http::{api_router, AppState};
