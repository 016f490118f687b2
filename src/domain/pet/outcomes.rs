//! Outcomes reported by pet transitions.
//!
//! These are what the UI turns into notices ("Buddy misses you!").

use serde::{Deserialize, Serialize};

use super::PetStage;

/// Notice produced by the start-of-session decay check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecayNotice {
    /// Cared for today; nothing decayed.
    None,
    /// Exactly one day without care.
    MissesYou,
    /// More than one day without care.
    Neglected { days: u32 },
}

impl DecayNotice {
    /// Maps a whole-day gap to the matching notice.
    pub fn for_days(days: u32) -> Self {
        match days {
            0 => DecayNotice::None,
            1 => DecayNotice::MissesYou,
            n => DecayNotice::Neglected { days: n },
        }
    }

    /// Returns the user-facing message, if any.
    pub fn message(&self, pet_name: &str) -> Option<String> {
        match self {
            DecayNotice::None => None,
            DecayNotice::MissesYou => Some(format!(
                "{} misses you! Your virtual pet needs some attention today.",
                pet_name
            )),
            DecayNotice::Neglected { days } => Some(format!(
                "{} is feeling neglected! It's been {} days since you last cared for your pet.",
                pet_name, days
            )),
        }
    }
}

/// Result of a care event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CareResult {
    /// A care event already happened on this calendar day; nothing changed.
    AlreadyCaredToday,
    /// Care accepted.
    Cared {
        streak: u32,
        evolved_to: Option<PetStage>,
    },
}

impl CareResult {
    /// Returns true if the care event changed the pet.
    pub fn is_accepted(&self) -> bool {
        matches!(self, CareResult::Cared { .. })
    }

    /// Returns the new streak, if care was accepted.
    pub fn streak(&self) -> Option<u32> {
        match self {
            CareResult::Cared { streak, .. } => Some(*streak),
            CareResult::AlreadyCaredToday => None,
        }
    }

    /// Returns the stage the pet evolved into, if it evolved.
    pub fn evolved_to(&self) -> Option<PetStage> {
        match self {
            CareResult::Cared { evolved_to, .. } => *evolved_to,
            CareResult::AlreadyCaredToday => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_days_picks_notice_by_gap() {
        assert_eq!(DecayNotice::for_days(0), DecayNotice::None);
        assert_eq!(DecayNotice::for_days(1), DecayNotice::MissesYou);
        assert_eq!(DecayNotice::for_days(4), DecayNotice::Neglected { days: 4 });
    }

    #[test]
    fn neglected_message_includes_day_count() {
        let msg = DecayNotice::Neglected { days: 3 }.message("Pip").unwrap();
        assert!(msg.starts_with("Pip is feeling neglected"));
        assert!(msg.contains("3 days"));
        assert!(DecayNotice::None.message("Pip").is_none());
    }

    #[test]
    fn care_result_accessors() {
        let rejected = CareResult::AlreadyCaredToday;
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.streak(), None);

        let cared = CareResult::Cared {
            streak: 4,
            evolved_to: Some(PetStage::Child),
        };
        assert!(cared.is_accepted());
        assert_eq!(cared.streak(), Some(4));
        assert_eq!(cared.evolved_to(), Some(PetStage::Child));
    }
}
