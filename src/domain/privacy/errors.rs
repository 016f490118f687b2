use thiserror::Error;

use crate::domain::foundation::{DomainError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrivacyError {
    #[error("Auto-delete period must be 30, 90 or 365 days, got {0}")]
    InvalidAutoDelete(u32),
}

impl From<PrivacyError> for DomainError {
    fn from(err: PrivacyError) -> Self {
        match err {
            PrivacyError::InvalidAutoDelete(days) => ValidationError::invalid_format(
                "autoDeleteAfterDays",
                format!("{} is not an offered period", days),
            )
            .into(),
        }
    }
}
