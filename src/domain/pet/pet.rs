//! PetState aggregate.
//!
//! The virtual pet rewards daily self-care. One care event per calendar day
//! raises happiness and growth; enough growth moves the pet up one stage;
//! days without care cost happiness when the next session starts.
//!
//! # Persistence
//!
//! The aggregate performs no I/O. Callers load a snapshot with
//! [`PetState::load_or_init`] and save after every mutation.

use serde::{Deserialize, Serialize};

use super::{CareResult, DecayNotice, PetError, PetStage};
use crate::domain::foundation::{Percentage, StateMachine, Timestamp};

/// Maximum length for the pet's name, in characters.
pub const MAX_NAME_LENGTH: usize = 15;

/// Name given to a freshly hatched pet.
pub const DEFAULT_NAME: &str = "Buddy";

/// Happiness of a freshly hatched pet.
pub const INITIAL_HAPPINESS: u8 = 70;

/// Happiness lost per whole day without care.
pub const DECAY_PER_DAY: u64 = 10;

/// Happiness gained per accepted care event.
pub const CARE_HAPPINESS_GAIN: u32 = 20;

/// Growth gained per accepted care event.
pub const CARE_GROWTH_GAIN: u32 = 5;

/// Growth at which the pet moves to the next stage.
pub const EVOLUTION_THRESHOLD: u8 = 100;

/// Virtual pet aggregate.
///
/// # Invariants
///
/// - `name` is 1-15 characters, non-blank
/// - `happiness` is within 0-100
/// - `growth` is within 0-99; it wraps to 0 when the stage advances
/// - `stage` only moves one rung forward at a time
/// - at most one accepted care event per calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetState {
    name: String,
    stage: PetStage,
    happiness: Percentage,
    growth: Percentage,
    last_cared_for: Timestamp,
    streak: u32,
}

impl PetState {
    /// Creates a new egg, treated as last cared for at `now`.
    pub fn new(now: Timestamp) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            stage: PetStage::Egg,
            happiness: Percentage::new(INITIAL_HAPPINESS),
            growth: Percentage::ZERO,
            last_cared_for: now,
            streak: 0,
        }
    }

    /// Reconstitute a pet from known values (clamped, no events).
    pub fn reconstitute(
        name: String,
        stage: PetStage,
        happiness: u8,
        growth: u8,
        last_cared_for: Timestamp,
        streak: u32,
    ) -> Self {
        Self {
            name,
            stage,
            happiness: Percentage::new(happiness),
            growth: Percentage::new(growth),
            last_cared_for,
            streak,
        }
        .normalized()
    }

    /// Returns the persisted pet if the snapshot is present and well-formed,
    /// otherwise a new egg.
    ///
    /// A snapshot that fails to parse is treated exactly like a missing one.
    pub fn load_or_init(persisted: Option<serde_json::Value>, now: Timestamp) -> Self {
        persisted
            .and_then(|value| Self::from_snapshot(value).ok())
            .unwrap_or_else(|| PetState::new(now))
    }

    /// Parses a persisted snapshot, repairing out-of-range fields.
    pub fn from_snapshot(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<PetState>(value).map(PetState::normalized)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the pet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current stage.
    pub fn stage(&self) -> PetStage {
        self.stage
    }

    /// Returns happiness (0-100).
    pub fn happiness(&self) -> u8 {
        self.happiness.value()
    }

    /// Returns growth toward the next stage (0-99).
    pub fn growth(&self) -> u8 {
        self.growth.value()
    }

    /// Returns when the pet was last cared for.
    pub fn last_cared_for(&self) -> &Timestamp {
        &self.last_cared_for
    }

    /// Returns the count of consecutive cared-for days.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Returns true if the pet was already cared for on `now`'s calendar day.
    pub fn cared_for_on(&self, now: &Timestamp) -> bool {
        self.last_cared_for.is_same_day(now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies happiness decay for the whole calendar days since last care.
    ///
    /// Runs once per session start. Does not touch `last_cared_for`, so the
    /// gap keeps counting until the next care event.
    pub fn apply_passive_decay(&mut self, now: &Timestamp) -> DecayNotice {
        let days = now.calendar_days_since(&self.last_cared_for).max(0) as u64;
        if days >= 1 {
            self.happiness = self.happiness.minus(DECAY_PER_DAY.saturating_mul(days));
        }
        DecayNotice::for_days(u32::try_from(days).unwrap_or(u32::MAX))
    }

    /// Records a care event at `now`.
    ///
    /// A second care on the same calendar day is rejected and leaves the pet
    /// untouched.
    pub fn care_for(&mut self, now: Timestamp) -> CareResult {
        if self.cared_for_on(&now) {
            return CareResult::AlreadyCaredToday;
        }

        let is_consecutive = now.calendar_days_since(&self.last_cared_for) == 1;
        self.streak = if is_consecutive {
            self.streak.saturating_add(1)
        } else {
            1
        };

        self.happiness = self.happiness.plus(CARE_HAPPINESS_GAIN);

        let growth = u32::from(self.growth.value()) + CARE_GROWTH_GAIN;
        let mut evolved_to = None;
        if growth >= u32::from(EVOLUTION_THRESHOLD) {
            match self.stage.next() {
                Some(next) => {
                    if let Ok(stage) = self.stage.transition_to(next) {
                        self.stage = stage;
                        evolved_to = Some(stage);
                    }
                    self.growth = Percentage::ZERO;
                }
                None => self.growth = Percentage::new(EVOLUTION_THRESHOLD - 1),
            }
        } else {
            self.growth = Percentage::new(growth as u8);
        }

        self.last_cared_for = now;

        CareResult::Cared {
            streak: self.streak,
            evolved_to,
        }
    }

    /// Renames the pet, returning the old name.
    ///
    /// The new name is trimmed and cut to 15 characters.
    ///
    /// # Errors
    ///
    /// - `PetError::EmptyName` if the name is blank; the pet is unchanged
    pub fn rename(&mut self, new_name: &str) -> Result<String, PetError> {
        let name = Self::clean_name(new_name).ok_or(PetError::EmptyName)?;
        Ok(std::mem::replace(&mut self.name, name))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn clean_name(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.chars().take(MAX_NAME_LENGTH).collect::<String>().trim_end().to_string())
    }

    /// Re-establishes the invariants on a snapshot that came from outside.
    fn normalized(mut self) -> Self {
        self.name = Self::clean_name(&self.name).unwrap_or_else(|| DEFAULT_NAME.to_string());
        if self.growth.value() >= EVOLUTION_THRESHOLD {
            self.growth = Percentage::new(EVOLUTION_THRESHOLD - 1);
        }
        self
    }
}
