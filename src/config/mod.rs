//! Application configuration module.
//!
//! Provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with
//! the `ARCH_COMPASS` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use arch_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod generator;

pub use error::{ConfigError, ConfigValidationError};
pub use generator::GeneratorConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Recommendation generator configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `ARCH_COMPASS` prefix, e.g.
    /// `ARCH_COMPASS__GENERATOR__MODEL=claude-3-haiku-20240307`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARCH_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.generator.validate()?;
        Ok(())
    }
}
