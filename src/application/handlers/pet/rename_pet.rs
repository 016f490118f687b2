//! RenamePetHandler - Command handler for renaming the pet.

use std::sync::Arc;

use tracing::{debug, info};

use super::load_pet;
use crate::application::snapshot::save_snapshot;
use crate::domain::foundation::{CommandContext, DomainError};
use crate::domain::pet::PetState;
use crate::ports::{StateStorage, StorageKey};

/// Command to rename the pet.
#[derive(Debug, Clone)]
pub struct RenamePetCommand {
    pub new_name: String,
}

/// Result of a successful rename.
#[derive(Debug, Clone)]
pub struct RenamePetResult {
    pub pet: PetState,
    pub old_name: String,
}

/// Handler for renaming the pet.
pub struct RenamePetHandler {
    storage: Arc<dyn StateStorage>,
}

impl RenamePetHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: RenamePetCommand,
        ctx: CommandContext,
    ) -> Result<RenamePetResult, DomainError> {
        let mut pet = load_pet(self.storage.as_ref(), ctx.issued_at).await;

        let old_name = pet.rename(&cmd.new_name).map_err(|e| {
            debug!(error = %e, "Rename rejected");
            DomainError::from(e)
        })?;

        save_snapshot(self.storage.as_ref(), StorageKey::VirtualPet, &pet).await?;

        info!(
            source = ctx.source().unwrap_or("unknown"),
            old_name = %old_name,
            new_name = pet.name(),
            "Pet renamed"
        );

        Ok(RenamePetResult { pet, old_name })
    }
}
