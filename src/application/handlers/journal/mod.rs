//! Journal handlers - Selecting a day and saving its entry.

mod save_journal_entry;
mod select_journal_date;

pub use save_journal_entry::{
    SaveJournalEntryCommand, SaveJournalEntryHandler, SaveJournalEntryResult,
};
pub use select_journal_date::{SelectJournalDateHandler, SelectJournalDateQuery};
