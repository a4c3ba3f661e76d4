//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContactRelay` - Delivery of contact form messages

mod contact_relay;

pub use contact_relay::{ContactError, ContactRelay};
