//! Journal module.
//!
//! Daily free-text entries keyed by calendar day, plus writing prompts.

mod entry;
mod errors;
#[allow(clippy::module_inception)]
mod journal;
mod prompts;

pub use entry::JournalEntry;
pub use errors::JournalError;
pub use journal::{Journal, JournalView, SaveOutcome};
pub use prompts::{pick_prompt, PROMPTS};
