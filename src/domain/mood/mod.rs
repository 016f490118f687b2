//! Mood tracker module.
//!
//! Mood check-ins live only for the current session. Whether the history
//! is shown is governed by the `showMoodHistory` privacy flag.

mod tracker;

pub use tracker::{Mood, MoodEntry, MoodTracker};
