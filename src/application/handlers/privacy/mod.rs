//! Privacy handlers - Settings updates and data removal.

mod clear_all_data;
mod update_privacy_settings;

pub use clear_all_data::{ClearAllDataCommand, ClearAllDataHandler, ClearAllDataResult};
pub use update_privacy_settings::{
    UpdatePrivacySettingsCommand, UpdatePrivacySettingsHandler, UpdatePrivacySettingsResult,
};
