//! Sorting Problem - The validated input of one classification run.

use serde::Serialize;

use super::{PerformanceMatrix, ProfileSequence, ThresholdTable, WeightVector};
use crate::domain::foundation::{CredibilityThreshold, CriterionId, ElectreError};

/// A complete, cross-checked ELECTRE Tri-B problem instance.
///
/// Construction guarantees that A, B, T and w cover exactly the same
/// criteria, so the engine never meets a missing cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortingProblem {
    performance: PerformanceMatrix,
    profiles: ProfileSequence,
    thresholds: ThresholdTable,
    weights: WeightVector,
    credibility_threshold: CredibilityThreshold,
}

impl SortingProblem {
    /// Assembles a problem, checking lambda and criterion agreement.
    ///
    /// # Errors
    /// - `InvalidCredibilityThreshold` if lambda is outside [0.5, 1]
    /// - `DimensionMismatch` naming the first criterion on which the tables disagree
    pub fn new(
        performance: PerformanceMatrix,
        profiles: ProfileSequence,
        thresholds: ThresholdTable,
        weights: WeightVector,
        credibility_threshold: f64,
    ) -> Result<Self, ElectreError> {
        let credibility_threshold = CredibilityThreshold::try_new(credibility_threshold)?;

        let reference = performance.criterion_ids();
        ensure_same_criteria(reference, "profile sequence", profiles.criterion_ids())?;
        ensure_same_criteria(reference, "threshold table", thresholds.criterion_ids())?;
        ensure_same_criteria(reference, "weight vector", weights.criterion_ids())?;

        Ok(Self {
            performance,
            profiles,
            thresholds,
            weights,
            credibility_threshold,
        })
    }

    /// Returns the same problem with another cutting level.
    pub fn with_credibility_threshold(self, value: f64) -> Result<Self, ElectreError> {
        Ok(Self {
            credibility_threshold: CredibilityThreshold::try_new(value)?,
            ..self
        })
    }

    /// Criteria of the problem, in performance-matrix order.
    pub fn criterion_ids(&self) -> &[CriterionId] {
        self.performance.criterion_ids()
    }

    pub fn performance(&self) -> &PerformanceMatrix {
        &self.performance
    }

    pub fn profiles(&self) -> &ProfileSequence {
        &self.profiles
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn credibility_threshold(&self) -> CredibilityThreshold {
        self.credibility_threshold
    }
}

fn ensure_same_criteria(
    reference: &[CriterionId],
    table: &'static str,
    other: &[CriterionId],
) -> Result<(), ElectreError> {
    if let Some(missing) = reference.iter().find(|c| !other.contains(c)) {
        return Err(ElectreError::dimension_mismatch(
            table,
            missing,
            "criterion is missing",
        ));
    }
    if let Some(extra) = other.iter().find(|c| !reference.contains(c)) {
        return Err(ElectreError::dimension_mismatch(
            table,
            extra,
            "criterion is not in the performance matrix",
        ));
    }
    Ok(())
}
