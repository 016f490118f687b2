//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("Unknown breathing pattern: {0}")]
    UnknownBreathingPattern(String),

    #[error("Breathing cycles must be greater than zero")]
    InvalidBreathingCycles,

    #[error("Meditation length must be between {min} and {max} minutes, got {actual}")]
    InvalidMeditationMinutes { min: u32, max: u32, actual: u32 },
}
