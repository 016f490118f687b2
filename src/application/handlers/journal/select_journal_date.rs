//! SelectJournalDateHandler - Query handler for the journal editor.

use std::sync::Arc;

use crate::application::snapshot::load_snapshot;
use crate::domain::foundation::{CommandContext, DomainError, Timestamp};
use crate::domain::journal::{Journal, JournalView};
use crate::ports::{StateStorage, StorageKey};

/// Query for the entry on a given day.
#[derive(Debug, Clone)]
pub struct SelectJournalDateQuery {
    pub date: Timestamp,
}

/// Handler for selecting a journal date.
pub struct SelectJournalDateHandler {
    storage: Arc<dyn StateStorage>,
}

impl SelectJournalDateHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        query: SelectJournalDateQuery,
        _ctx: CommandContext,
    ) -> Result<JournalView, DomainError> {
        let journal: Journal = load_snapshot(self.storage.as_ref(), StorageKey::JournalEntries)
            .await
            .unwrap_or_default();

        Ok(journal.select_date(query.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStateStorage;
    use serde_json::json;

    fn day(n: i64) -> Timestamp {
        Timestamp::from_unix_secs(1_709_283_600).add_days(n)
    }

    #[tokio::test]
    async fn selects_existing_entry_text() {
        let storage = Arc::new(InMemoryStateStorage::with_documents([(
            StorageKey::JournalEntries,
            json!([{
                "id": "0b6f0c3e-8f5e-4c1a-9f5e-2c1d3a4b5c6d",
                "date": day(0).to_string(),
                "content": "Slept well."
            }]),
        )]));
        let handler = SelectJournalDateHandler::new(storage);

        let view = handler
            .handle(
                SelectJournalDateQuery {
                    date: day(0).plus_secs(7_200),
                },
                CommandContext::at(day(0)),
            )
            .await
            .unwrap();

        assert_eq!(view.content, "Slept well.");
        assert!(view.entry_id.is_some());
    }

    #[tokio::test]
    async fn empty_store_gives_empty_view() {
        let handler = SelectJournalDateHandler::new(Arc::new(InMemoryStateStorage::new()));

        let view = handler
            .handle(
                SelectJournalDateQuery { date: day(2) },
                CommandContext::at(day(2)),
            )
            .await
            .unwrap();

        assert!(view.content.is_empty());
        assert_eq!(view.entry_id, None);
    }
}
