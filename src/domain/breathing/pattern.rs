//! Breathing pattern catalog.

use serde::Serialize;

use super::BreathPhase;
use crate::domain::foundation::{DomainError, ErrorCode};

/// A named breathing technique: four phase durations in whole seconds.
///
/// A duration of 0 does not skip the phase; it still occupies one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreathingPattern {
    pub name: &'static str,
    pub inhale: u32,
    pub hold1: u32,
    pub exhale: u32,
    pub hold2: u32,
    pub description: &'static str,
}

impl BreathingPattern {
    /// 4-7-8: inhale 4, hold 7, exhale 8.
    pub const FOUR_SEVEN_EIGHT: BreathingPattern = BreathingPattern {
        name: "4-7-8 Technique",
        inhale: 4,
        hold1: 7,
        exhale: 8,
        hold2: 0,
        description: "Helps reduce anxiety and helps with sleep",
    };

    /// Box breathing: four equal sides of 4 seconds.
    pub const BOX: BreathingPattern = BreathingPattern {
        name: "Box Breathing",
        inhale: 4,
        hold1: 4,
        exhale: 4,
        hold2: 4,
        description: "Reduces stress and improves focus",
    };

    /// Relaxing breath: long inhale and exhale, no holds.
    pub const RELAXING: BreathingPattern = BreathingPattern {
        name: "Relaxing Breath",
        inhale: 6,
        hold1: 0,
        exhale: 8,
        hold2: 0,
        description: "For deep relaxation and calm",
    };

    /// All built-in patterns, in display order. The first is the default.
    pub const CATALOG: [BreathingPattern; 3] = [
        BreathingPattern::FOUR_SEVEN_EIGHT,
        BreathingPattern::BOX,
        BreathingPattern::RELAXING,
    ];

    /// Looks up a catalog pattern by its display name.
    ///
    /// # Errors
    ///
    /// - `PatternNotFound` if no catalog entry has that name
    pub fn find(name: &str) -> Result<BreathingPattern, DomainError> {
        Self::CATALOG
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::PatternNotFound,
                    format!("Unknown breathing pattern: {}", name),
                )
                .with_detail("pattern", name)
            })
    }

    /// Configured duration of a phase, possibly 0.
    pub fn duration_of(&self, phase: BreathPhase) -> u32 {
        match phase {
            BreathPhase::Inhale => self.inhale,
            BreathPhase::Hold1 => self.hold1,
            BreathPhase::Exhale => self.exhale,
            BreathPhase::Hold2 => self.hold2,
        }
    }

    /// Number of ticks a phase occupies (0 counts as 1).
    pub fn ticks_for(&self, phase: BreathPhase) -> u32 {
        self.duration_of(phase).max(1)
    }

    /// Ticks in one full cycle.
    pub fn cycle_ticks(&self) -> u32 {
        BreathPhase::ALL.iter().map(|p| self.ticks_for(*p)).sum()
    }
}

impl Default for BreathingPattern {
    fn default() -> Self {
        Self::CATALOG[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_catalog_entry() {
        assert_eq!(BreathingPattern::default(), BreathingPattern::FOUR_SEVEN_EIGHT);
    }

    #[test]
    fn find_is_case_insensitive() {
        let pattern = BreathingPattern::find("box breathing").unwrap();
        assert_eq!(pattern, BreathingPattern::BOX);
    }

    #[test]
    fn find_unknown_pattern_fails() {
        let err = BreathingPattern::find("Fire Breath").unwrap_err();
        assert_eq!(err.code, ErrorCode::PatternNotFound);
    }

    #[test]
    fn zero_duration_phase_counts_as_one_tick() {
        let p = BreathingPattern::FOUR_SEVEN_EIGHT;
        assert_eq!(p.duration_of(BreathPhase::Hold2), 0);
        assert_eq!(p.ticks_for(BreathPhase::Hold2), 1);
    }

    #[test]
    fn cycle_ticks_match_catalog() {
        assert_eq!(BreathingPattern::BOX.cycle_ticks(), 16);
        assert_eq!(BreathingPattern::FOUR_SEVEN_EIGHT.cycle_ticks(), 20);
        assert_eq!(BreathingPattern::RELAXING.cycle_ticks(), 16);
    }
}
