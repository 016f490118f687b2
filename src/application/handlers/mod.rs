//! Application handlers.
//!
//! Each handler loads what it needs through the storage port, applies a
//! pure domain transition, and saves the result.

pub mod forum;
pub mod journal;
pub mod pet;
pub mod privacy;

pub use forum::{
    CreatePostCommand, CreatePostHandler, CreatePostResult, CreateReplyCommand,
    CreateReplyHandler, CreateReplyResult, LikeTarget, ToggleLikeCommand, ToggleLikeHandler,
    ToggleLikeResult,
};
pub use journal::{
    SaveJournalEntryCommand, SaveJournalEntryHandler, SaveJournalEntryResult,
    SelectJournalDateHandler, SelectJournalDateQuery,
};
pub use pet::{
    CareForPetCommand, CareForPetHandler, CareForPetResult, RenamePetCommand, RenamePetHandler,
    RenamePetResult, StartPetSessionCommand, StartPetSessionHandler, StartPetSessionResult,
};
pub use privacy::{
    ClearAllDataCommand, ClearAllDataHandler, ClearAllDataResult, UpdatePrivacySettingsCommand,
    UpdatePrivacySettingsHandler, UpdatePrivacySettingsResult,
};
