//! Journal-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ValidationError};

/// Errors raised by journal commands. The journal is unchanged when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    #[error("Journal entry cannot be empty")]
    EmptyContent,
}

impl From<JournalError> for DomainError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::EmptyContent => ValidationError::empty_field("content").into(),
        }
    }
}
