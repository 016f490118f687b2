//! Session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::breathing::BreathingPattern;
use crate::domain::meditation::{DEFAULT_MINUTES, MAX_MINUTES, MIN_MINUTES};

/// Settings for the interactive session host
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Milliseconds between ticks of the breathing and meditation timers
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Name of the breathing pattern to run
    #[serde(default = "default_breathing_pattern")]
    pub breathing_pattern: String,

    /// Breathing cycles to complete before the session ends
    #[serde(default = "default_breathing_cycles")]
    pub breathing_cycles: u32,

    /// Meditation timer length in minutes
    #[serde(default = "default_meditation_minutes")]
    pub meditation_minutes: u32,
}

impl SessionConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Resolves the configured pattern against the catalog.
    pub fn pattern(&self) -> Result<BreathingPattern, ValidationError> {
        BreathingPattern::find(&self.breathing_pattern)
            .map_err(|_| ValidationError::UnknownBreathingPattern(self.breathing_pattern.clone()))
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_interval_ms == 0 {
            return Err(ValidationError::InvalidTickInterval);
        }
        self.pattern()?;
        if self.breathing_cycles == 0 {
            return Err(ValidationError::InvalidBreathingCycles);
        }
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&self.meditation_minutes) {
            return Err(ValidationError::InvalidMeditationMinutes {
                min: MIN_MINUTES,
                max: MAX_MINUTES,
                actual: self.meditation_minutes,
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            breathing_pattern: default_breathing_pattern(),
            breathing_cycles: default_breathing_cycles(),
            meditation_minutes: default_meditation_minutes(),
        }
    }
}

fn default_tick_interval() -> u64 {
    1000
}

fn default_breathing_pattern() -> String {
    BreathingPattern::default().name.to_string()
}

fn default_breathing_cycles() -> u32 {
    3
}

fn default_meditation_minutes() -> u32 {
    DEFAULT_MINUTES
}
