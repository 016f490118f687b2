//! Meditation timer module.

mod timer;

pub use timer::{Ambience, MeditationTimer, DEFAULT_MINUTES, MAX_MINUTES, MIN_MINUTES};
