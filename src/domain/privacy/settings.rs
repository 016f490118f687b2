use serde::{Deserialize, Serialize};

use super::PrivacyError;

/// Auto-delete periods offered to the user, in days.
pub const AUTO_DELETE_CHOICES: [u32; 3] = [30, 90, 365];

/// User privacy preferences, persisted under `privacySettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacySettings {
    pub anonymous_mode: bool,
    pub encrypt_data: bool,
    pub auto_delete_after_days: Option<u32>,
    pub show_mood_history: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            anonymous_mode: false,
            encrypt_data: true,
            auto_delete_after_days: None,
            show_mood_history: true,
        }
    }
}

/// A single-field update to the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum SettingChange {
    AnonymousMode(bool),
    EncryptData(bool),
    AutoDeleteAfterDays(Option<u32>),
    ShowMoodHistory(bool),
}

impl PrivacySettings {
    /// Applies one change. An unsupported auto-delete period leaves the
    /// settings untouched.
    pub fn apply(&mut self, change: SettingChange) -> Result<(), PrivacyError> {
        match change {
            SettingChange::AnonymousMode(on) => self.anonymous_mode = on,
            SettingChange::EncryptData(on) => self.encrypt_data = on,
            SettingChange::AutoDeleteAfterDays(days) => {
                if let Some(d) = days {
                    if !AUTO_DELETE_CHOICES.contains(&d) {
                        return Err(PrivacyError::InvalidAutoDelete(d));
                    }
                }
                self.auto_delete_after_days = days;
            }
            SettingChange::ShowMoodHistory(on) => self.show_mood_history = on,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let s = PrivacySettings::default();
        assert!(!s.anonymous_mode);
        assert!(s.encrypt_data);
        assert_eq!(s.auto_delete_after_days, None);
        assert!(s.show_mood_history);
    }

    #[test]
    fn apply_sets_single_field() {
        let mut s = PrivacySettings::default();
        s.apply(SettingChange::AnonymousMode(true)).unwrap();
        assert!(s.anonymous_mode);
        assert!(s.encrypt_data);
    }

    #[test]
    fn auto_delete_accepts_offered_periods_and_none() {
        let mut s = PrivacySettings::default();
        for days in AUTO_DELETE_CHOICES {
            s.apply(SettingChange::AutoDeleteAfterDays(Some(days))).unwrap();
            assert_eq!(s.auto_delete_after_days, Some(days));
        }
        s.apply(SettingChange::AutoDeleteAfterDays(None)).unwrap();
        assert_eq!(s.auto_delete_after_days, None);
    }

    #[test]
    fn auto_delete_rejects_other_periods() {
        let mut s = PrivacySettings::default();
        s.apply(SettingChange::AutoDeleteAfterDays(Some(90))).unwrap();

        let err = s.apply(SettingChange::AutoDeleteAfterDays(Some(7)));

        assert_eq!(err, Err(PrivacyError::InvalidAutoDelete(7)));
        assert_eq!(s.auto_delete_after_days, Some(90));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(PrivacySettings::default()).unwrap();
        assert_eq!(json["encryptData"], true);
        assert!(json["autoDeleteAfterDays"].is_null());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s: PrivacySettings = serde_json::from_str(r#"{"anonymousMode":true}"#).unwrap();
        assert!(s.anonymous_mode);
        assert!(s.encrypt_data);
        assert!(s.show_mood_history);
    }

    #[test]
    fn setting_change_round_trips_as_tagged_json() {
        let change: SettingChange =
            serde_json::from_str(r#"{"field":"showMoodHistory","value":false}"#).unwrap();
        assert_eq!(change, SettingChange::ShowMoodHistory(false));
    }
}
