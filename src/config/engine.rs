//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::CredibilityThreshold;

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Cutting level λ applied to credibility indices
    #[serde(default = "default_credibility_threshold")]
    pub credibility_threshold: f64,
}

impl EngineConfig {
    /// Validated cutting level
    pub fn credibility_threshold(&self) -> Result<CredibilityThreshold, ValidationError> {
        CredibilityThreshold::try_new(self.credibility_threshold)
            .map_err(|_| ValidationError::InvalidCredibilityThreshold(self.credibility_threshold))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.credibility_threshold().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            credibility_threshold: default_credibility_threshold(),
        }
    }
}

fn default_credibility_threshold() -> f64 {
    CredibilityThreshold::TYPICAL.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_typical_lambda() {
        assert_eq!(EngineConfig::default().credibility_threshold, 0.75);
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn lambda_below_half_is_invalid() {
        let config = EngineConfig {
            credibility_threshold: 0.4,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidCredibilityThreshold(0.4))
        );
    }
}
