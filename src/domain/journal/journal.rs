//! Journal aggregate: one entry per calendar day, in insertion order.

use serde::{Deserialize, Serialize};

use super::{JournalEntry, JournalError};
use crate::domain::foundation::{EntryId, Timestamp};

/// What the editor shows for a selected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalView {
    pub date: Timestamp,
    pub entry_id: Option<EntryId>,
    pub content: String,
}

/// How a save changed the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SaveOutcome {
    Created { id: EntryId },
    Updated { id: EntryId },
}

impl SaveOutcome {
    pub fn id(&self) -> EntryId {
        match self {
            SaveOutcome::Created { id } | SaveOutcome::Updated { id } => *id,
        }
    }
}

/// All journal entries.
///
/// # Invariants
///
/// - entry ids are unique
/// - at most one entry per calendar day
/// - entries keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry written on `date`'s calendar day, if any.
    pub fn entry_on(&self, date: &Timestamp) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.is_on(date))
    }

    /// Builds the editor view for `date`: that day's text, or empty.
    pub fn select_date(&self, date: Timestamp) -> JournalView {
        match self.entry_on(&date) {
            Some(entry) => JournalView {
                date,
                entry_id: Some(entry.id),
                content: entry.content.clone(),
            },
            None => JournalView {
                date,
                entry_id: None,
                content: String::new(),
            },
        }
    }

    /// Writes `content` as the entry for `date`'s calendar day.
    ///
    /// Replaces the text of an existing entry for that day, otherwise appends
    /// a new entry.
    ///
    /// # Errors
    ///
    /// - `JournalError::EmptyContent` if the text is blank
    pub fn save_entry(
        &mut self,
        date: Timestamp,
        content: impl Into<String>,
    ) -> Result<SaveOutcome, JournalError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(JournalError::EmptyContent);
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.is_on(&date)) {
            entry.content = content;
            return Ok(SaveOutcome::Updated { id: entry.id });
        }

        let entry = JournalEntry::new(date, content);
        let id = entry.id;
        self.entries.push(entry);
        Ok(SaveOutcome::Created { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(n: i64) -> Timestamp {
        Timestamp::from_unix_secs(1_709_283_600).add_days(n)
    }

    #[test]
    fn select_date_without_entry_is_empty() {
        let journal = Journal::new();
        let view = journal.select_date(day(0));
        assert_eq!(view.content, "");
        assert_eq!(view.entry_id, None);
    }

    #[test]
    fn save_creates_then_select_finds_it_later_that_day() {
        let mut journal = Journal::new();
        let outcome = journal.save_entry(day(0), "Walked by the river").unwrap();
        assert!(matches!(outcome, SaveOutcome::Created { .. }));

        let view = journal.select_date(day(0).plus_secs(3 * 3600));
        assert_eq!(view.content, "Walked by the river");
        assert_eq!(view.entry_id, Some(outcome.id()));
    }

    #[test]
    fn save_same_day_updates_in_place() {
        let mut journal = Journal::new();
        let first = journal.save_entry(day(0), "Morning").unwrap();
        let second = journal.save_entry(day(0).plus_secs(600), "Morning, edited").unwrap();

        assert_eq!(second, SaveOutcome::Updated { id: first.id() });
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].content, "Morning, edited");
        assert_eq!(journal.entries()[0].date, day(0));
    }

    #[test]
    fn different_days_append_in_order() {
        let mut journal = Journal::new();
        journal.save_entry(day(2), "third").unwrap();
        journal.save_entry(day(0), "first").unwrap();

        let contents: Vec<_> = journal.entries().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["third", "first"]);
    }

    #[test]
    fn blank_content_is_rejected_without_change() {
        let mut journal = Journal::new();
        journal.save_entry(day(0), "kept").unwrap();
        let before = journal.clone();

        assert_eq!(journal.save_entry(day(0), "   \n"), Err(JournalError::EmptyContent));
        assert_eq!(journal, before);
    }

    #[test]
    fn deserializes_browser_array() {
        let value = json!([
            {
                "id": "6f1c1f4e-8a8e-4c55-9d7e-0b1c6b0d8f11",
                "date": "2024-03-01T10:00:00.000Z",
                "content": "Grateful for tea"
            }
        ]);
        let journal: Journal = serde_json::from_value(value).unwrap();
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.select_date(day(0)).content, "Grateful for tea");
    }
}
