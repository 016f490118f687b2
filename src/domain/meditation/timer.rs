//! MeditationTimer - a countdown with optional ambient sound.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest selectable session, in minutes.
pub const MIN_MINUTES: u32 = 1;

/// Longest selectable session, in minutes.
pub const MAX_MINUTES: u32 = 60;

/// Session length before the user picks one.
pub const DEFAULT_MINUTES: u32 = 5;

/// Background sound played during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Ambience {
    #[default]
    None,
    Rain,
    Forest,
    Ocean,
}

impl fmt::Display for Ambience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ambience::None => "none",
            Ambience::Rain => "rain",
            Ambience::Forest => "forest",
            Ambience::Ocean => "ocean",
        };
        write!(f, "{}", s)
    }
}

/// Ephemeral meditation countdown.
///
/// # Invariants
///
/// - `remaining_secs <= duration_secs`
/// - the timer stops itself when `remaining_secs` reaches 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeditationTimer {
    duration_secs: u32,
    remaining_secs: u32,
    playing: bool,
    ambience: Ambience,
}

impl MeditationTimer {
    /// Creates a stopped timer of `minutes` (clamped to 1-60).
    pub fn new(minutes: u32) -> Self {
        let duration_secs = minutes.clamp(MIN_MINUTES, MAX_MINUTES) * 60;
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            playing: false,
            ambience: Ambience::None,
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn ambience(&self) -> Ambience {
        self.ambience
    }

    /// Returns true once the countdown has run out.
    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Changes the session length and rewinds to it. A running timer keeps
    /// running from the new full length.
    pub fn set_duration_minutes(&mut self, minutes: u32) {
        self.duration_secs = minutes.clamp(MIN_MINUTES, MAX_MINUTES) * 60;
        self.remaining_secs = self.duration_secs;
    }

    pub fn set_ambience(&mut self, ambience: Ambience) {
        self.ambience = ambience;
    }

    /// Starts or pauses. Starting a finished timer rewinds it first.
    pub fn toggle(&mut self) {
        if self.remaining_secs == 0 {
            self.remaining_secs = self.duration_secs;
        }
        self.playing = !self.playing;
    }

    /// Stops and rewinds to the full duration.
    pub fn reset(&mut self) {
        self.playing = false;
        self.remaining_secs = self.duration_secs;
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.remaining_secs <= 1 {
            self.remaining_secs = 0;
            self.playing = false;
        } else {
            self.remaining_secs -= 1;
        }
    }

    /// Remaining time as `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }
}

impl Default for MeditationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES)
    }
}
