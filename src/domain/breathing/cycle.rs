//! BreathingState - the breathing-guide timer.
//!
//! Driven by a one-second tick while active. The counter shows the seconds
//! left in the current phase and never drops below 1 while running; at 1 the
//! next tick moves to the following phase.

use serde::Serialize;

use super::{BreathPhase, BreathingPattern};

/// Ephemeral state of a breathing exercise. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreathingState {
    pattern: BreathingPattern,
    phase: BreathPhase,
    counter: u32,
    cycles: u32,
    active: bool,
}

impl BreathingState {
    /// Creates a stopped exercise at the start of `pattern`.
    pub fn new(pattern: BreathingPattern) -> Self {
        Self {
            pattern,
            phase: BreathPhase::Inhale,
            counter: pattern.ticks_for(BreathPhase::Inhale),
            cycles: 0,
            active: false,
        }
    }

    pub fn pattern(&self) -> &BreathingPattern {
        &self.pattern
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// Seconds remaining in the current phase.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Completed full cycles.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Switches to another pattern.
    ///
    /// Stops the timer and rewinds to the start of the inhale phase.
    /// Completed cycles are kept.
    pub fn select_pattern(&mut self, pattern: BreathingPattern) {
        self.pattern = pattern;
        self.rewind();
    }

    /// Starts or pauses the timer.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// Stops the timer, rewinds to inhale and clears the cycle count.
    pub fn reset(&mut self) {
        self.rewind();
        self.cycles = 0;
    }

    /// Advances the exercise by one second.
    ///
    /// Does nothing while paused.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }

        if self.counter > 1 {
            self.counter -= 1;
            return;
        }

        if self.phase.closes_cycle() {
            self.cycles = self.cycles.saturating_add(1);
        }
        self.phase = self.phase.next();
        self.counter = self.pattern.ticks_for(self.phase);
    }

    fn rewind(&mut self) {
        self.active = false;
        self.phase = BreathPhase::Inhale;
        self.counter = self.pattern.ticks_for(BreathPhase::Inhale);
    }
}

impl Default for BreathingState {
    fn default() -> Self {
        Self::new(BreathingPattern::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn running(pattern: BreathingPattern) -> BreathingState {
        let mut state = BreathingState::new(pattern);
        state.toggle();
        state
    }

    fn tick_n(state: &mut BreathingState, n: u32) {
        for _ in 0..n {
            state.tick();
        }
    }

    #[test]
    fn new_state_is_stopped_at_inhale() {
        let state = BreathingState::new(BreathingPattern::BOX);
        assert_eq!(state.phase(), BreathPhase::Inhale);
        assert_eq!(state.counter(), 4);
        assert_eq!(state.cycles(), 0);
        assert!(!state.is_active());
    }

    #[test]
    fn tick_while_paused_is_noop() {
        let mut state = BreathingState::new(BreathingPattern::BOX);
        let before = state.clone();
        tick_n(&mut state, 10);
        assert_eq!(state, before);
    }

    #[test]
    fn tick_counts_down_within_phase() {
        let mut state = running(BreathingPattern::BOX);
        tick_n(&mut state, 3);
        assert_eq!(state.phase(), BreathPhase::Inhale);
        assert_eq!(state.counter(), 1);
    }

    #[test]
    fn tick_at_one_moves_to_next_phase() {
        let mut state = running(BreathingPattern::BOX);
        tick_n(&mut state, 4);
        assert_eq!(state.phase(), BreathPhase::Hold1);
        assert_eq!(state.counter(), 4);
    }

    #[test]
    fn box_breathing_cycle_is_sixteen_ticks() {
        let mut state = running(BreathingPattern::BOX);
        tick_n(&mut state, 15);
        assert_eq!(state.cycles(), 0);
        assert_eq!(state.phase(), BreathPhase::Hold2);

        state.tick();
        assert_eq!(state.cycles(), 1);
        assert_eq!(state.phase(), BreathPhase::Inhale);
        assert_eq!(state.counter(), 4);
    }

    #[test]
    fn four_seven_eight_hold2_occupies_one_tick() {
        let mut state = running(BreathingPattern::FOUR_SEVEN_EIGHT);
        tick_n(&mut state, 4 + 7 + 8);
        assert_eq!(state.phase(), BreathPhase::Hold2);
        assert_eq!(state.counter(), 1);
        assert_eq!(state.cycles(), 0);

        state.tick();
        assert_eq!(state.phase(), BreathPhase::Inhale);
        assert_eq!(state.counter(), 4);
        assert_eq!(state.cycles(), 1);
    }

    #[test]
    fn relaxing_breath_holds_are_single_ticks() {
        let mut state = running(BreathingPattern::RELAXING);
        tick_n(&mut state, 6);
        assert_eq!(state.phase(), BreathPhase::Hold1);
        assert_eq!(state.counter(), 1);
        state.tick();
        assert_eq!(state.phase(), BreathPhase::Exhale);
        assert_eq!(state.counter(), 8);
    }

    #[test]
    fn pausing_freezes_progress() {
        let mut state = running(BreathingPattern::BOX);
        tick_n(&mut state, 5);
        state.toggle();
        let frozen = state.clone();
        tick_n(&mut state, 20);
        assert_eq!(state, frozen);

        state.toggle();
        state.tick();
        assert_eq!(state.counter(), 2);
    }

    #[test]
    fn select_pattern_stops_and_rewinds_but_keeps_cycles() {
        let mut state = running(BreathingPattern::BOX);
        tick_n(&mut state, 16 + 5);
        assert_eq!(state.cycles(), 1);

        state.select_pattern(BreathingPattern::RELAXING);

        assert!(!state.is_active());
        assert_eq!(state.pattern(), &BreathingPattern::RELAXING);
        assert_eq!(state.phase(), BreathPhase::Inhale);
        assert_eq!(state.counter(), 6);
        assert_eq!(state.cycles(), 1);
    }

    #[test]
    fn reset_clears_cycles() {
        let mut state = running(BreathingPattern::BOX);
        tick_n(&mut state, 40);
        state.reset();
        assert_eq!(state, BreathingState::new(BreathingPattern::BOX));
    }

    proptest! {
        #[test]
        fn full_cycles_return_to_start(pattern_idx in 0usize..3, cycles in 1u32..6) {
            let pattern = BreathingPattern::CATALOG[pattern_idx];
            let mut state = running(pattern);
            tick_n(&mut state, pattern.cycle_ticks() * cycles);
            prop_assert_eq!(state.cycles(), cycles);
            prop_assert_eq!(state.phase(), BreathPhase::Inhale);
            prop_assert_eq!(state.counter(), pattern.ticks_for(BreathPhase::Inhale));
        }

        #[test]
        fn counter_never_drops_below_one(pattern_idx in 0usize..3, ticks in 0u32..200) {
            let mut state = running(BreathingPattern::CATALOG[pattern_idx]);
            for _ in 0..ticks {
                state.tick();
                prop_assert!(state.counter() >= 1);
            }
        }
    }
}
