//! SaveJournalEntryHandler - Command handler for writing a day's entry.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::snapshot::{load_snapshot, save_snapshot};
use crate::domain::foundation::{CommandContext, DomainError, Timestamp};
use crate::domain::journal::{Journal, SaveOutcome};
use crate::ports::{StateStorage, StorageKey};

/// Command to save the text for a day.
#[derive(Debug, Clone)]
pub struct SaveJournalEntryCommand {
    pub date: Timestamp,
    pub content: String,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveJournalEntryResult {
    pub outcome: SaveOutcome,
    pub entry_count: usize,
}

/// Handler for saving journal entries.
pub struct SaveJournalEntryHandler {
    storage: Arc<dyn StateStorage>,
}

impl SaveJournalEntryHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: SaveJournalEntryCommand,
        ctx: CommandContext,
    ) -> Result<SaveJournalEntryResult, DomainError> {
        let mut journal: Journal =
            load_snapshot(self.storage.as_ref(), StorageKey::JournalEntries)
                .await
                .unwrap_or_default();

        let outcome = journal.save_entry(cmd.date, cmd.content).map_err(|e| {
            debug!(error = %e, "Journal save rejected");
            DomainError::from(e)
        })?;

        save_snapshot(self.storage.as_ref(), StorageKey::JournalEntries, &journal).await?;

        info!(
            source = ctx.source().unwrap_or("unknown"),
            entry_id = %outcome.id(),
            outcome = ?outcome,
            entries = journal.len(),
            "Journal entry saved"
        );

        Ok(SaveJournalEntryResult {
            outcome,
            entry_count: journal.len(),
        })
    }
}
