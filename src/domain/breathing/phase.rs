//! BreathPhase enum for the four segments of a breathing cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// One segment of a breathing cycle.
///
/// Phases form a ring: inhale -> hold1 -> exhale -> hold2 -> inhale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    #[default]
    Inhale,
    Hold1,
    Exhale,
    Hold2,
}

impl BreathPhase {
    /// All phases in cycle order.
    pub const ALL: [BreathPhase; 4] = [
        BreathPhase::Inhale,
        BreathPhase::Hold1,
        BreathPhase::Exhale,
        BreathPhase::Hold2,
    ];

    /// The phase that follows this one.
    pub fn next(&self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold1,
            BreathPhase::Hold1 => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Hold2,
            BreathPhase::Hold2 => BreathPhase::Inhale,
        }
    }

    /// Returns true if leaving this phase completes a cycle.
    pub fn closes_cycle(&self) -> bool {
        matches!(self, BreathPhase::Hold2)
    }

    /// Instruction shown while in this phase.
    pub fn instruction(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe in...",
            BreathPhase::Hold1 | BreathPhase::Hold2 => "Hold...",
            BreathPhase::Exhale => "Breathe out...",
        }
    }
}

impl StateMachine for BreathPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == *target
    }

    fn valid_transitions(&self) -> Vec<Self> {
        vec![self.next()]
    }
}

impl fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BreathPhase::Inhale => "inhale",
            BreathPhase::Hold1 => "hold1",
            BreathPhase::Exhale => "exhale",
            BreathPhase::Hold2 => "hold2",
        };
        write!(f, "{}", s)
    }
}
