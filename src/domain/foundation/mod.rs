//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, state machine trait, and error types
//! shared by every framework module.

mod errors;
mod percentage;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
