//! Profile Synthesizer - Equidistant profiles and proportional thresholds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BoundsTable, ThresholdPercentages};
use crate::domain::foundation::{ElectreError, ValidationError};
use crate::domain::problem::{ProfileSequence, ThresholdTable};

/// How many profiles to place and how wide to make the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisSettings {
    pub base_profiles: usize,
    pub percentages: ThresholdPercentages,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            base_profiles: 4,
            percentages: ThresholdPercentages::default(),
        }
    }
}

/// Derives base profiles and thresholds from worst/best bounds.
pub struct ProfileSynthesizer;

impl ProfileSynthesizer {
    /// Places `count` profiles evenly between worst and best.
    ///
    /// Profile i (1-based, named `b{i}`) sits at i / (count + 1) of the way
    /// from worst to best on every criterion.
    pub fn equidistant_profiles(
        bounds: &BoundsTable,
        count: usize,
    ) -> Result<ProfileSequence, ElectreError> {
        ensure_count(count)?;
        let steps = (count + 1) as f64;

        let mut builder = ProfileSequence::builder()
            .criteria(bounds.criterion_ids().iter().map(|c| c.as_str().to_string()));
        for i in 1..=count {
            let fraction = i as f64 / steps;
            builder = builder.profile(
                format!("b{}", i),
                bounds.iter().map(|(_, b)| b.interpolate(fraction)),
            );
        }

        let profiles = builder.build()?;
        debug!(
            profiles = profiles.len(),
            criteria = bounds.criterion_ids().len(),
            "Synthesized equidistant profiles"
        );
        Ok(profiles)
    }

    /// Thresholds proportional to the mean inter-profile gap
    /// (best − worst) / (count + 1) of each criterion.
    pub fn proportional_thresholds(
        bounds: &BoundsTable,
        count: usize,
        percentages: &ThresholdPercentages,
    ) -> Result<ThresholdTable, ElectreError> {
        ensure_count(count)?;
        let steps = (count + 1) as f64;

        let mut builder = ThresholdTable::builder();
        for (criterion, b) in bounds.iter() {
            let (q, p, v) = percentages.scale(b.range() / steps);
            builder = builder.criterion(criterion.as_str(), q, p, v);
        }
        builder.build()
    }

    /// Profiles and thresholds for the given settings.
    pub fn synthesize(
        bounds: &BoundsTable,
        settings: &SynthesisSettings,
    ) -> Result<(ProfileSequence, ThresholdTable), ElectreError> {
        Ok((
            Self::equidistant_profiles(bounds, settings.base_profiles)?,
            Self::proportional_thresholds(bounds, settings.base_profiles, &settings.percentages)?,
        ))
    }
}

fn ensure_count(count: usize) -> Result<(), ElectreError> {
    if count == 0 {
        return Err(ValidationError::out_of_range("base_profiles", 1.0, f64::MAX, 0.0).into());
    }
    Ok(())
}
