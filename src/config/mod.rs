//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! TOML file and environment variables using the `config` and `dotenvy`
//! crates. Environment variables use the `ELECTRE_TRI` prefix and nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use electre_tri::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Cutting level {}", config.engine.credibility_threshold);
//! ```

mod engine;
mod error;
mod logging;
mod synthesis;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use synthesis::SynthesisConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "ELECTRE_TRI";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Engine configuration (cutting level)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Profile synthesis defaults
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ELECTRE_TRI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `ELECTRE_TRI__ENGINE__CREDIBILITY_THRESHOLD=0.8` -> `engine.credibility_threshold = 0.8`
    /// - `ELECTRE_TRI__LOGGING__FORMAT=json` -> `logging.format = json`
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// Load configuration from a file, with environment variables taking
    /// precedence over its values.
    ///
    /// The format is inferred from the file extension.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(Some(path.as_ref()))
    }

    fn build(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.synthesis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
