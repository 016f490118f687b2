//! Pet-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ValidationError};

/// Errors raised by pet transitions.
///
/// Every variant means the transition was rejected and the pet is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetError {
    #[error("Pet name cannot be empty")]
    EmptyName,
}

impl From<PetError> for DomainError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::EmptyName => ValidationError::empty_field("name").into(),
        }
    }
}
