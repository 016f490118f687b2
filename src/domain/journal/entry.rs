//! JournalEntry entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EntryId, Timestamp};

/// A single day's journal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: Timestamp,
    pub content: String,
}

impl JournalEntry {
    /// Creates an entry with a fresh id.
    pub fn new(date: Timestamp, content: String) -> Self {
        Self {
            id: EntryId::new(),
            date,
            content,
        }
    }

    /// Returns true if this entry belongs to `date`'s calendar day.
    pub fn is_on(&self, date: &Timestamp) -> bool {
        self.date.is_same_day(date)
    }
}
