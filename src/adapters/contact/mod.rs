//! Contact relay adapters.
//!
//! - `HttpContactRelay` - Form-encoded POST to a third-party form endpoint
//! - `InMemoryContactRelay` - Records messages; configurable failure

mod http_relay;
mod in_memory;

pub use http_relay::{HttpContactRelay, HttpRelayConfig};
pub use in_memory::InMemoryContactRelay;
