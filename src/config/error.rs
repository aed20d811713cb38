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
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Credibility threshold must be between 0.5 and 1, got {0}")]
    InvalidCredibilityThreshold(f64),

    #[error("At least one base profile is required")]
    NoBaseProfiles,

    #[error("Invalid threshold percentages: {0}")]
    InvalidThresholdPercentages(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
