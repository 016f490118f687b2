//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait, command
//! context, and error types that form the vocabulary of the Mindful domain.

mod command;
mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use command::CommandContext;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EntryId, PostId, ReplyId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
