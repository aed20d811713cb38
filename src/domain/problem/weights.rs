//! Weight Vector - Relative importance of criteria.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, ElectreError};

/// Non-negative weight per criterion. Weights need not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightVector {
    criterion_ids: Vec<CriterionId>,
    weights: HashMap<CriterionId, f64>,
    total: f64,
}

impl WeightVector {
    /// Creates a builder for constructing a weight vector.
    pub fn builder() -> WeightVectorBuilder {
        WeightVectorBuilder::new()
    }

    /// Criterion ids in declaration order.
    pub fn criterion_ids(&self) -> &[CriterionId] {
        &self.criterion_ids
    }

    /// Gets the raw weight of a criterion.
    pub fn get(&self, criterion: &CriterionId) -> Option<f64> {
        self.weights.get(criterion).copied()
    }

    /// Gets the weight of a criterion divided by the sum of weights.
    pub fn normalized(&self, criterion: &CriterionId) -> Option<f64> {
        self.get(criterion).map(|w| w / self.total)
    }

    /// Sum of all weights, always > 0.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Builder for constructing WeightVector instances.
#[derive(Debug, Default)]
pub struct WeightVectorBuilder {
    rows: Vec<(String, f64)>,
}

impl WeightVectorBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the weight of a criterion.
    pub fn weight(mut self, id: impl Into<String>, weight: f64) -> Self {
        self.rows.push((id.into(), weight));
        self
    }

    /// Builds the weight vector.
    ///
    /// # Errors
    /// - `InvalidWeights` for a negative or non-finite weight, when all
    ///   weights are zero, or when their sum is not finite
    pub fn build(self) -> Result<WeightVector, ElectreError> {
        if self.rows.is_empty() {
            return Err(ElectreError::EmptyInput { what: "weights" });
        }

        let mut criterion_ids = Vec::with_capacity(self.rows.len());
        let mut weights = HashMap::with_capacity(self.rows.len());
        let mut total = 0.0;

        for (id, weight) in self.rows {
            let criterion = CriterionId::new(id)?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(ElectreError::InvalidWeights {
                    reason: format!("weight of '{}' must be finite and >= 0, got {}", criterion, weight),
                    criterion: Some(criterion),
                });
            }
            if weights.insert(criterion.clone(), weight).is_some() {
                return Err(ElectreError::dimension_mismatch(
                    "weight vector",
                    &criterion,
                    "criterion is declared twice",
                ));
            }
            total += weight;
            criterion_ids.push(criterion);
        }

        if total <= 0.0 {
            return Err(ElectreError::invalid_weights("sum of weights is zero"));
        }
        if !total.is_finite() {
            return Err(ElectreError::invalid_weights("sum of weights overflows"));
        }

        Ok(WeightVector {
            criterion_ids,
            weights,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sums_weights() {
        let w = WeightVector::builder()
            .weight("c1", 0.7)
            .weight("c2", 0.3)
            .build()
            .unwrap();
        assert!((w.total() - 1.0).abs() < 1e-12);
        assert_eq!(w.get(&CriterionId::new("c1").unwrap()), Some(0.7));
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        let w = WeightVector::builder()
            .weight("c1", 7.0)
            .weight("c2", 3.0)
            .build()
            .unwrap();
        let normalized = w.normalized(&CriterionId::new("c1").unwrap()).unwrap();
        assert!((normalized - 0.7).abs() < 1e-12);
    }

    #[test]
    fn zero_weights_are_rejected() {
        let result = WeightVector::builder()
            .weight("c1", 0.0)
            .weight("c2", 0.0)
            .build();
        match result {
            Err(ElectreError::InvalidWeights { criterion, .. }) => assert!(criterion.is_none()),
            other => panic!("Expected InvalidWeights, got {:?}", other),
        }
    }

    #[test]
    fn negative_weight_names_criterion() {
        let result = WeightVector::builder()
            .weight("c1", 0.5)
            .weight("c2", -0.1)
            .build();
        match result {
            Err(ElectreError::InvalidWeights { criterion, .. }) => {
                assert_eq!(criterion.unwrap().as_str(), "c2")
            }
            other => panic!("Expected InvalidWeights, got {:?}", other),
        }
    }

    #[test]
    fn overflowing_weight_sum_is_rejected() {
        let result = WeightVector::builder()
            .weight("c1", f64::MAX)
            .weight("c2", f64::MAX)
            .build();
        match result {
            Err(ElectreError::InvalidWeights { criterion, reason }) => {
                assert!(criterion.is_none());
                assert!(reason.contains("overflows"));
            }
            other => panic!("Expected InvalidWeights, got {:?}", other),
        }
    }

    #[test]
    fn single_zero_weight_is_allowed() {
        let result = WeightVector::builder()
            .weight("c1", 1.0)
            .weight("c2", 0.0)
            .build();
        assert!(result.is_ok());
    }
}
