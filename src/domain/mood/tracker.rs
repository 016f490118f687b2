use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;

/// How the user feels right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Bad,
    Awful,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Great, Mood::Good, Mood::Okay, Mood::Bad, Mood::Awful];

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "🙂",
            Mood::Okay => "😐",
            Mood::Bad => "😕",
            Mood::Awful => "😢",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Bad => "bad",
            Mood::Awful => "awful",
        };
        write!(f, "{}", s)
    }
}

/// A single check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    pub recorded_at: Timestamp,
}

/// Session-scoped mood history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodTracker {
    current: Option<Mood>,
    history: Vec<MoodEntry>,
}

impl MoodTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current mood and appends it to the history.
    pub fn record(&mut self, mood: Mood, now: Timestamp) {
        self.current = Some(mood);
        self.history.push(MoodEntry {
            mood,
            recorded_at: now,
        });
    }

    pub fn current(&self) -> Option<Mood> {
        self.current
    }

    pub fn history(&self) -> &[MoodEntry] {
        &self.history
    }

    /// Returns the history when the user has chosen to show it, else nothing.
    pub fn visible_history(&self, show_mood_history: bool) -> &[MoodEntry] {
        if show_mood_history {
            &self.history
        } else {
            &[]
        }
    }
}
