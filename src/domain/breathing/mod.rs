//! Breathing guide module.
//!
//! A four-phase cycle timer (inhale, hold, exhale, hold) over a small
//! catalog of named techniques.

mod cycle;
mod pattern;
mod phase;

pub use cycle::BreathingState;
pub use pattern::BreathingPattern;
pub use phase::BreathPhase;
