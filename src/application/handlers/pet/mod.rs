//! Pet handlers - Command handlers for the virtual pet.

mod care_for_pet;
mod rename_pet;
mod start_pet_session;

pub use care_for_pet::{CareForPetCommand, CareForPetHandler, CareForPetResult};
pub use rename_pet::{RenamePetCommand, RenamePetHandler, RenamePetResult};
pub use start_pet_session::{StartPetSessionCommand, StartPetSessionHandler, StartPetSessionResult};

use tracing::warn;

use crate::application::snapshot::load_document;
use crate::domain::foundation::Timestamp;
use crate::domain::pet::PetState;
use crate::ports::{StateStorage, StorageKey};

/// Loads the persisted pet, falling back to a new egg.
async fn load_pet(storage: &dyn StateStorage, now: Timestamp) -> PetState {
    let Some(document) = load_document(storage, StorageKey::VirtualPet).await else {
        return PetState::new(now);
    };
    match PetState::from_snapshot(document) {
        Ok(pet) => pet,
        Err(e) => {
            warn!(error = %e, "Malformed pet snapshot, hatching a new egg");
            PetState::new(now)
        }
    }
}
