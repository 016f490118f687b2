//! Privacy settings module.
//!
//! The settings are persisted flags. Nothing in the crate encrypts,
//! anonymises, or auto-deletes on their behalf.

mod errors;
mod settings;

pub use errors::PrivacyError;
pub use settings::{PrivacySettings, SettingChange, AUTO_DELETE_CHOICES};
