//! Profile synthesis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::synthesis::{SynthesisSettings, ThresholdPercentages};

/// Defaults for equidistant profile synthesis
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// Number of base profiles to place between worst and best
    #[serde(default = "default_base_profiles")]
    pub base_profiles: usize,

    /// Indifference threshold as a share of the inter-profile gap
    #[serde(default = "default_indifference")]
    pub indifference: f64,

    /// Preference threshold as a share of the inter-profile gap
    #[serde(default = "default_preference")]
    pub preference: f64,

    /// Veto threshold as a share of the inter-profile gap
    #[serde(default = "default_veto")]
    pub veto: f64,
}

impl SynthesisConfig {
    /// Converts into domain settings
    pub fn settings(&self) -> Result<SynthesisSettings, ValidationError> {
        if self.base_profiles == 0 {
            return Err(ValidationError::NoBaseProfiles);
        }
        let percentages =
            ThresholdPercentages::try_new(self.indifference, self.preference, self.veto)
                .map_err(|e| ValidationError::InvalidThresholdPercentages(e.to_string()))?;

        Ok(SynthesisSettings {
            base_profiles: self.base_profiles,
            percentages,
        })
    }

    /// Validate synthesis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.settings().map(|_| ())
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_profiles: default_base_profiles(),
            indifference: default_indifference(),
            preference: default_preference(),
            veto: default_veto(),
        }
    }
}

fn default_base_profiles() -> usize {
    SynthesisSettings::default().base_profiles
}

fn default_indifference() -> f64 {
    ThresholdPercentages::default().indifference()
}

fn default_preference() -> f64 {
    ThresholdPercentages::default().preference()
}

fn default_veto() -> f64 {
    ThresholdPercentages::default().veto()
}
