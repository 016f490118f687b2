//! Virtual pet module.
//!
//! A gamified habit tracker: daily care grows the pet through five stages
//! and builds a streak, while neglect costs happiness.

mod errors;
mod outcomes;
#[allow(clippy::module_inception)]
mod pet;
mod stage;

pub use errors::PetError;
pub use outcomes::{CareResult, DecayNotice};
pub use pet::{
    PetState, CARE_GROWTH_GAIN, CARE_HAPPINESS_GAIN, DECAY_PER_DAY, DEFAULT_NAME,
    EVOLUTION_THRESHOLD, INITIAL_HAPPINESS, MAX_NAME_LENGTH,
};
pub use stage::PetStage;
