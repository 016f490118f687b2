//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MINDFUL` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use mindful::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data lives in {}", config.storage.data_dir.display());
//! ```

mod error;
mod logging;
mod session;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use session::SessionConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Persistence location
    pub storage: StorageConfig,

    /// Session host behaviour (tick rate, breathing, meditation)
    pub session: SessionConfig,

    /// Log filter and format
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MINDFUL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MINDFUL__STORAGE__DATA_DIR=./data` -> `storage.data_dir = ./data`
    /// - `MINDFUL__SESSION__BREATHING_CYCLES=5` -> `session.breathing_cycles = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MINDFUL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.session.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "MINDFUL__STORAGE__DATA_DIR",
        "MINDFUL__SESSION__TICK_INTERVAL_MS",
        "MINDFUL__SESSION__BREATHING_PATTERN",
        "MINDFUL__SESSION__BREATHING_CYCLES",
        "MINDFUL__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("./data"));
        assert_eq!(config.session.tick_interval_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MINDFUL__STORAGE__DATA_DIR", "/tmp/mindful");
        env::set_var("MINDFUL__SESSION__BREATHING_CYCLES", "5");
        env::set_var("MINDFUL__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/mindful"));
        assert_eq!(config.session.breathing_cycles, 5);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_unknown_pattern() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MINDFUL__SESSION__BREATHING_PATTERN", "Fire Breath");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownBreathingPattern(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_tick_interval() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MINDFUL__SESSION__TICK_INTERVAL_MS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidTickInterval));
    }
}
