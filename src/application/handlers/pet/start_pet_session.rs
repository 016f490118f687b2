//! StartPetSessionHandler - Loads the pet and applies passive decay.

use std::sync::Arc;

use tracing::info;

use super::load_pet;
use crate::application::snapshot::save_snapshot;
use crate::domain::foundation::{CommandContext, DomainError};
use crate::domain::pet::{DecayNotice, PetState};
use crate::ports::{StateStorage, StorageKey};

/// Command to open a session with the pet.
#[derive(Debug, Clone, Default)]
pub struct StartPetSessionCommand;

/// Pet state after the start-of-session decay.
#[derive(Debug, Clone)]
pub struct StartPetSessionResult {
    pub pet: PetState,
    pub notice: DecayNotice,
}

impl StartPetSessionResult {
    /// The notice text to show, if any.
    pub fn message(&self) -> Option<String> {
        self.notice.message(self.pet.name())
    }
}

/// Handler run once when a session begins.
pub struct StartPetSessionHandler {
    storage: Arc<dyn StateStorage>,
}

impl StartPetSessionHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        _cmd: StartPetSessionCommand,
        ctx: CommandContext,
    ) -> Result<StartPetSessionResult, DomainError> {
        // 1. Load or hatch
        let mut pet = load_pet(self.storage.as_ref(), ctx.issued_at).await;

        // 2. Decay for the days since the last care
        let notice = pet.apply_passive_decay(&ctx.issued_at);

        // 3. Persist
        save_snapshot(self.storage.as_ref(), StorageKey::VirtualPet, &pet).await?;

        info!(
            source = ctx.source().unwrap_or("unknown"),
            name = pet.name(),
            stage = %pet.stage(),
            happiness = pet.happiness(),
            streak = pet.streak(),
            notice = ?notice,
            "Pet session started"
        );

        Ok(StartPetSessionResult { pet, notice })
    }
}
