//! Foundation module - Shared domain primitives.
//!
//! Contains the error types, the state machine trait and the timestamp value
//! object shared by the content, page, interaction and contact modules.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
