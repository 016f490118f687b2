//! ClearAllDataHandler - Removes every user-authored document.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::foundation::{CommandContext, DomainError};
use crate::ports::{StateStorage, StorageKey};

/// Keys wiped by "clear all data". Privacy settings survive.
pub const CLEARED_KEYS: [StorageKey; 3] = [
    StorageKey::JournalEntries,
    StorageKey::VirtualPet,
    StorageKey::CommunityPosts,
];

/// Command to delete all stored user data.
#[derive(Debug, Clone, Default)]
pub struct ClearAllDataCommand;

/// Keys that were removed.
#[derive(Debug, Clone)]
pub struct ClearAllDataResult {
    pub removed: Vec<StorageKey>,
}

/// Handler for clearing stored data.
pub struct ClearAllDataHandler {
    storage: Arc<dyn StateStorage>,
}

impl ClearAllDataHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        _cmd: ClearAllDataCommand,
        ctx: CommandContext,
    ) -> Result<ClearAllDataResult, DomainError> {
        let mut removed = Vec::with_capacity(CLEARED_KEYS.len());

        for key in CLEARED_KEYS {
            if let Err(e) = self.storage.remove(key).await {
                error!(key = %key, error = %e, "Failed to clear stored data");
                return Err(e.into());
            }
            removed.push(key);
        }

        info!(
            source = ctx.source().unwrap_or("unknown"),
            removed = ?removed,
            "All user data cleared"
        );

        Ok(ClearAllDataResult { removed })
    }
}
