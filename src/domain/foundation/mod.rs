//! Foundation module - Shared domain primitives.
//!
//! Error types and the state machine trait used across the domain.

mod errors;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use state_machine::StateMachine;
