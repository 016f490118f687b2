//! PetStage enum for the pet's maturity ladder.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Maturity level of the virtual pet.
///
/// Stages only move forward, one rung at a time. `Adult` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PetStage {
    #[default]
    Egg,
    Baby,
    Child,
    Teen,
    Adult,
}

impl PetStage {
    /// All stages in growth order.
    pub const ALL: [PetStage; 5] = [
        PetStage::Egg,
        PetStage::Baby,
        PetStage::Child,
        PetStage::Teen,
        PetStage::Adult,
    ];

    /// Returns the stage that follows this one, if any.
    pub fn next(&self) -> Option<PetStage> {
        match self {
            PetStage::Egg => Some(PetStage::Baby),
            PetStage::Baby => Some(PetStage::Child),
            PetStage::Child => Some(PetStage::Teen),
            PetStage::Teen => Some(PetStage::Adult),
            PetStage::Adult => None,
        }
    }

    /// Emoji shown for this stage.
    pub fn emoji(&self) -> &'static str {
        match self {
            PetStage::Egg => "🥚",
            PetStage::Baby => "🐣",
            PetStage::Child => "🐥",
            PetStage::Teen => "🐤",
            PetStage::Adult => "🐔",
        }
    }
}

impl StateMachine for PetStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}

impl fmt::Display for PetStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PetStage::Egg => "egg",
            PetStage::Baby => "baby",
            PetStage::Child => "child",
            PetStage::Teen => "teen",
            PetStage::Adult => "adult",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_egg() {
        assert_eq!(PetStage::default(), PetStage::Egg);
    }

    #[test]
    fn next_walks_the_ladder_in_order() {
        let mut stage = PetStage::Egg;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            seen.push(next);
            stage = next;
        }
        assert_eq!(seen, PetStage::ALL.to_vec());
    }

    #[test]
    fn stages_cannot_skip_or_regress() {
        assert!(PetStage::Egg.can_transition_to(&PetStage::Baby));
        assert!(!PetStage::Egg.can_transition_to(&PetStage::Child));
        assert!(!PetStage::Teen.can_transition_to(&PetStage::Child));
        assert!(PetStage::Baby.transition_to(PetStage::Egg).is_err());
    }

    #[test]
    fn adult_is_terminal() {
        assert!(PetStage::Adult.is_terminal());
        for stage in &PetStage::ALL[..4] {
            assert!(!stage.is_terminal());
        }
    }

    #[test]
    fn ordering_follows_growth() {
        assert!(PetStage::Egg < PetStage::Baby);
        assert!(PetStage::Teen < PetStage::Adult);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PetStage::Teen).unwrap(), "\"teen\"");
        let stage: PetStage = serde_json::from_str("\"adult\"").unwrap();
        assert_eq!(stage, PetStage::Adult);
    }

    #[test]
    fn unknown_stage_fails_to_parse() {
        assert!(serde_json::from_str::<PetStage>("\"elder\"").is_err());
    }
}
