//! Engine Settings - Defaults a sorting run takes from configuration.

use crate::config::{AppConfig, ValidationError};
use crate::domain::foundation::CredibilityThreshold;
use crate::domain::synthesis::SynthesisSettings;

/// Validated engine defaults.
///
/// Applied where an instance leaves a value open: the cutting level of a
/// batch input without one, and the synthesis settings of equidistant runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub credibility_threshold: CredibilityThreshold,
    pub synthesis: SynthesisSettings,
}

impl EngineSettings {
    /// Resolves the engine and synthesis sections of the configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            credibility_threshold: config.engine.credibility_threshold()?,
            synthesis: config.synthesis.settings()?,
        })
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            credibility_threshold: CredibilityThreshold::TYPICAL,
            synthesis: SynthesisSettings::default(),
        }
    }
}
