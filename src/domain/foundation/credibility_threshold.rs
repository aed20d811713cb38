//! Cutting level (lambda) value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ElectreError;

/// Minimum credibility required to assert "x outranks y", within [0.5, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CredibilityThreshold(f64);

impl CredibilityThreshold {
    /// Lowest admissible cutting level.
    pub const MIN: f64 = 0.5;

    /// Highest admissible cutting level.
    pub const MAX: f64 = 1.0;

    /// Cutting level usually recommended in the literature.
    pub const TYPICAL: Self = Self(0.75);

    /// Creates a CredibilityThreshold, returning error if outside [0.5, 1].
    pub fn try_new(value: f64) -> Result<Self, ElectreError> {
        // NaN fails both comparisons and is rejected here too
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ElectreError::InvalidCredibilityThreshold { value });
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if `credibility` reaches this cutting level.
    pub fn is_met_by(&self, credibility: f64) -> bool {
        credibility >= self.0
    }
}

impl Default for CredibilityThreshold {
    fn default() -> Self {
        Self::TYPICAL
    }
}

impl TryFrom<f64> for CredibilityThreshold {
    type Error = ElectreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CredibilityThreshold> for f64 {
    fn from(threshold: CredibilityThreshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for CredibilityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "λ={}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_bounds() {
        assert!(CredibilityThreshold::try_new(0.5).is_ok());
        assert!(CredibilityThreshold::try_new(0.75).is_ok());
        assert!(CredibilityThreshold::try_new(1.0).is_ok());
    }

    #[test]
    fn try_new_rejects_outside_range() {
        for value in [0.0, 0.49, 1.01, f64::NAN, f64::INFINITY] {
            match CredibilityThreshold::try_new(value) {
                Err(ElectreError::InvalidCredibilityThreshold { .. }) => {}
                other => panic!("Expected InvalidCredibilityThreshold for {value}, got {:?}", other),
            }
        }
    }

    #[test]
    fn default_is_typical_level() {
        assert_eq!(CredibilityThreshold::default().value(), 0.75);
    }

    #[test]
    fn is_met_by_is_inclusive() {
        let lambda = CredibilityThreshold::try_new(0.7).unwrap();
        assert!(lambda.is_met_by(0.7));
        assert!(lambda.is_met_by(0.71));
        assert!(!lambda.is_met_by(0.69));
    }

    #[test]
    fn deserialization_validates_range() {
        let ok: CredibilityThreshold = serde_json::from_str("0.8").unwrap();
        assert_eq!(ok.value(), 0.8);
        let bad: Result<CredibilityThreshold, _> = serde_json::from_str("0.2");
        assert!(bad.is_err());
    }

    #[test]
    fn displays_with_lambda_symbol() {
        let lambda = CredibilityThreshold::try_new(0.75).unwrap();
        assert_eq!(format!("{}", lambda), "λ=0.75");
    }
}
