//! Performance Matrix - Alternatives scored on every criterion.

use serde::Serialize;

use super::evaluation::{build_rows, parse_criteria, Evaluation};
use crate::domain::foundation::{AlternativeId, CriterionId, ElectreError};

/// An alternative with its performance on each criterion.
pub type Alternative = Evaluation<AlternativeId>;

/// The performance matrix mapping alternatives x criteria to values.
///
/// All criteria are "higher is better". Criteria to minimise must be
/// sign-flipped by the caller before they reach this matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMatrix {
    criterion_ids: Vec<CriterionId>,
    alternatives: Vec<Alternative>,
}

impl PerformanceMatrix {
    /// Creates a builder for constructing a performance matrix.
    pub fn builder() -> PerformanceMatrixBuilder {
        PerformanceMatrixBuilder::new()
    }

    /// Ordered criterion ids.
    pub fn criterion_ids(&self) -> &[CriterionId] {
        &self.criterion_ids
    }

    /// Ordered alternatives.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Ordered alternative ids.
    pub fn alternative_ids(&self) -> Vec<AlternativeId> {
        self.alternatives.iter().map(|a| a.id().clone()).collect()
    }

    /// Gets an alternative by id.
    pub fn alternative(&self, id: &str) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.id().as_str() == id)
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }
}

/// Builder for constructing PerformanceMatrix instances.
#[derive(Debug, Default)]
pub struct PerformanceMatrixBuilder {
    criteria: Vec<String>,
    rows: Vec<(String, Vec<f64>)>,
}

impl PerformanceMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criteria, in the order row values are given.
    pub fn criteria<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an alternative with one value per criterion.
    pub fn alternative(
        mut self,
        id: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        self.rows.push((id.into(), values.into_iter().collect()));
        self
    }

    /// Builds the performance matrix.
    ///
    /// # Errors
    /// - `EmptyInput` if no criteria were declared
    /// - `DimensionMismatch` for duplicate ids or rows of the wrong length
    /// - `Validation` for blank ids or non-finite values
    pub fn build(self) -> Result<PerformanceMatrix, ElectreError> {
        let criterion_ids = parse_criteria("performance matrix", self.criteria)?;
        let alternatives = build_rows(
            "performance matrix",
            &criterion_ids,
            self.rows,
            AlternativeId::new,
        )?;

        Ok(PerformanceMatrix {
            criterion_ids,
            alternatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_matrix() -> PerformanceMatrix {
        PerformanceMatrix::builder()
            .criteria(["c1", "c2"])
            .alternative("a1", [8.5, 18.0])
            .alternative("a2", [14.0, 16.0])
            .alternative("a3", [5.0, 27.0])
            .build()
            .unwrap()
    }

    #[test]
    fn builder_creates_matrix_in_order() {
        let matrix = reference_matrix();
        assert_eq!(matrix.alternative_count(), 3);
        let ids: Vec<_> = matrix.alternative_ids().iter().map(|a| a.to_string()).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);
        assert_eq!(matrix.criterion_ids().len(), 2);
    }

    #[test]
    fn lookup_by_criterion_id() {
        let matrix = reference_matrix();
        let c1 = CriterionId::new("c1").unwrap();
        assert_eq!(matrix.alternative("a3").unwrap().value(&c1), Some(5.0));
        assert!(matrix.alternative("a9").is_none());
    }

    #[test]
    fn matrix_without_alternatives_is_allowed() {
        let matrix = PerformanceMatrix::builder().criteria(["c1"]).build().unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn matrix_without_criteria_is_rejected() {
        let result = PerformanceMatrix::builder().alternative("a1", []).build();
        assert_eq!(result, Err(ElectreError::EmptyInput { what: "criteria" }));
    }

    #[test]
    fn duplicate_alternative_is_rejected() {
        let result = PerformanceMatrix::builder()
            .criteria(["c1"])
            .alternative("a1", [1.0])
            .alternative("a1", [2.0])
            .build();
        assert!(matches!(result, Err(ElectreError::DimensionMismatch { .. })));
    }
}
