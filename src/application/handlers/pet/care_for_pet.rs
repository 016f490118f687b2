//! CareForPetHandler - Command handler for the daily care action.

use std::sync::Arc;

use tracing::{debug, info};

use super::load_pet;
use crate::application::snapshot::save_snapshot;
use crate::domain::foundation::{CommandContext, DomainError};
use crate::domain::pet::{CareResult, PetState};
use crate::ports::{StateStorage, StorageKey};

/// Command to care for the pet.
#[derive(Debug, Clone, Default)]
pub struct CareForPetCommand;

/// Result of a care attempt.
#[derive(Debug, Clone)]
pub struct CareForPetResult {
    pub pet: PetState,
    pub outcome: CareResult,
}

/// Handler for caring for the pet.
pub struct CareForPetHandler {
    storage: Arc<dyn StateStorage>,
}

impl CareForPetHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        _cmd: CareForPetCommand,
        ctx: CommandContext,
    ) -> Result<CareForPetResult, DomainError> {
        let mut pet = load_pet(self.storage.as_ref(), ctx.issued_at).await;

        let outcome = pet.care_for(ctx.issued_at);

        if !outcome.is_accepted() {
            debug!(name = pet.name(), "Pet already cared for today");
            return Ok(CareForPetResult { pet, outcome });
        }

        save_snapshot(self.storage.as_ref(), StorageKey::VirtualPet, &pet).await?;

        if let Some(stage) = outcome.evolved_to() {
            info!(name = pet.name(), stage = %stage, "Pet evolved");
        }
        info!(
            source = ctx.source().unwrap_or("unknown"),
            streak = pet.streak(),
            happiness = pet.happiness(),
            growth = pet.growth(),
            "Pet cared for"
        );

        Ok(CareForPetResult { pet, outcome })
    }
}
