//! Threshold percentages - (q%, p%, v%) of the mean inter-profile gap.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Fractions of the inter-profile gap used as (q, p, v).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPercentages {
    indifference: f64,
    preference: f64,
    veto: f64,
}

impl ThresholdPercentages {
    /// Creates validated percentages.
    ///
    /// # Errors
    /// - `NotFinite` or `OutOfRange` for a negative or non-finite share
    /// - `InvalidFormat` unless indifference <= preference <= veto
    pub fn try_new(indifference: f64, preference: f64, veto: f64) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("indifference", indifference),
            ("preference", preference),
            ("veto", veto),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::not_finite(field));
            }
            if value < 0.0 {
                return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
            }
        }

        if indifference > preference || preference > veto {
            return Err(ValidationError::invalid_format(
                "threshold_percentages",
                format!(
                    "expected indifference <= preference <= veto, got {} / {} / {}",
                    indifference, preference, veto
                ),
            ));
        }

        Ok(Self {
            indifference,
            preference,
            veto,
        })
    }

    pub fn indifference(&self) -> f64 {
        self.indifference
    }

    pub fn preference(&self) -> f64 {
        self.preference
    }

    pub fn veto(&self) -> f64 {
        self.veto
    }

    /// Scales the percentages by a gap into (q, p, v).
    pub fn scale(&self, gap: f64) -> (f64, f64, f64) {
        (
            self.indifference * gap,
            self.preference * gap,
            self.veto * gap,
        )
    }
}

impl Default for ThresholdPercentages {
    fn default() -> Self {
        Self {
            indifference: 0.10,
            preference: 0.25,
            veto: 0.50,
        }
    }
}
