//! UpdatePrivacySettingsHandler - Command handler for a single setting change.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::snapshot::{load_snapshot, save_snapshot};
use crate::domain::foundation::{CommandContext, DomainError};
use crate::domain::privacy::{PrivacySettings, SettingChange};
use crate::ports::{StateStorage, StorageKey};

/// Command to change one privacy setting.
#[derive(Debug, Clone)]
pub struct UpdatePrivacySettingsCommand {
    pub change: SettingChange,
}

/// Settings after the change.
#[derive(Debug, Clone)]
pub struct UpdatePrivacySettingsResult {
    pub settings: PrivacySettings,
}

/// Handler for updating privacy settings.
pub struct UpdatePrivacySettingsHandler {
    storage: Arc<dyn StateStorage>,
}

impl UpdatePrivacySettingsHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePrivacySettingsCommand,
        ctx: CommandContext,
    ) -> Result<UpdatePrivacySettingsResult, DomainError> {
        let mut settings: PrivacySettings =
            load_snapshot(self.storage.as_ref(), StorageKey::PrivacySettings)
                .await
                .unwrap_or_default();

        settings.apply(cmd.change).map_err(|e| {
            debug!(error = %e, "Privacy setting rejected");
            DomainError::from(e)
        })?;

        save_snapshot(self.storage.as_ref(), StorageKey::PrivacySettings, &settings).await?;

        info!(
            source = ctx.source().unwrap_or("unknown"),
            change = ?cmd.change,
            "Privacy settings updated"
        );

        Ok(UpdatePrivacySettingsResult { settings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStateStorage;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn change_is_applied_over_defaults_and_saved() {
        let storage = Arc::new(InMemoryStateStorage::new());
        let handler = UpdatePrivacySettingsHandler::new(storage.clone());

        let result = handler
            .handle(
                UpdatePrivacySettingsCommand {
                    change: SettingChange::ShowMoodHistory(false),
                },
                CommandContext::now(),
            )
            .await
            .unwrap();

        assert!(!result.settings.show_mood_history);
        assert!(result.settings.encrypt_data);
        let stored = storage.load(StorageKey::PrivacySettings).await.unwrap().unwrap();
        assert_eq!(stored["showMoodHistory"], false);
    }

    #[tokio::test]
    async fn unsupported_auto_delete_is_rejected() {
        let storage = Arc::new(InMemoryStateStorage::new());
        let handler = UpdatePrivacySettingsHandler::new(storage.clone());

        let err = handler
            .handle(
                UpdatePrivacySettingsCommand {
                    change: SettingChange::AutoDeleteAfterDays(Some(14)),
                },
                CommandContext::now(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(storage.is_empty().await);
    }
}
