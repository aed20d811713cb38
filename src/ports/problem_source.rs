//! Problem Source Port - Supplies named problem instances for batch runs.
//!
//! Ingestion (files, HTTP, databases) lives behind this trait. The engine
//! receives already-parsed tables and validates them itself, so one bad
//! instance never prevents the others from being classified.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{CredibilityThreshold, ElectreError, ProblemId};
use crate::domain::problem::{
    PerformanceMatrix, ProfileSequence, SortingProblem, ThresholdTable, WeightVector,
};

/// Values of one alternative or profile, in criterion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValues {
    pub id: String,
    pub values: Vec<f64>,
}

impl NamedValues {
    pub fn new(id: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            id: id.into(),
            values: values.into_iter().collect(),
        }
    }
}

/// (q, p, v) of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdInput {
    pub criterion: String,
    pub indifference: f64,
    pub preference: f64,
    pub veto: f64,
}

/// Weight of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightInput {
    pub criterion: String,
    pub weight: f64,
}

/// A parsed but not yet validated problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInput {
    pub id: ProblemId,
    pub criteria: Vec<String>,
    pub alternatives: Vec<NamedValues>,
    /// Profiles from lowest to highest.
    pub profiles: Vec<NamedValues>,
    pub thresholds: Vec<ThresholdInput>,
    pub weights: Vec<WeightInput>,
    /// Cutting level; the batch default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility_threshold: Option<f64>,
}

impl ProblemInput {
    /// Validates the tables and assembles a `SortingProblem`.
    ///
    /// `default_threshold` is used when the input carries no cutting level.
    pub fn into_problem(
        self,
        default_threshold: CredibilityThreshold,
    ) -> Result<SortingProblem, ElectreError> {
        let credibility_threshold = self
            .credibility_threshold
            .unwrap_or(default_threshold.value());

        let performance = self
            .alternatives
            .into_iter()
            .fold(
                PerformanceMatrix::builder().criteria(self.criteria.clone()),
                |builder, row| builder.alternative(row.id, row.values),
            )
            .build()?;

        let profiles = self
            .profiles
            .into_iter()
            .fold(
                ProfileSequence::builder().criteria(self.criteria),
                |builder, row| builder.profile(row.id, row.values),
            )
            .build()?;

        let thresholds = self
            .thresholds
            .into_iter()
            .fold(ThresholdTable::builder(), |builder, t| {
                builder.criterion(t.criterion, t.indifference, t.preference, t.veto)
            })
            .build()?;

        let weights = self
            .weights
            .into_iter()
            .fold(WeightVector::builder(), |builder, w| {
                builder.weight(w.criterion, w.weight)
            })
            .build()?;

        SortingProblem::new(
            performance,
            profiles,
            thresholds,
            weights,
            credibility_threshold,
        )
    }
}

/// Errors raised by a problem source itself, not by a problem instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("Problem source unavailable: {0}")]
    Unavailable(String),
}

/// Port for supplying problem instances to a batch run.
///
/// # Contract
///
/// Implementations must:
/// - Return instances in a stable order
/// - Leave validation of instance contents to the engine
pub trait ProblemSource: Send + Sync {
    /// All instances available for classification.
    fn problems(&self) -> Result<Vec<ProblemInput>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProblemInput {
        ProblemInput {
            id: ProblemId::new("reference").unwrap(),
            criteria: vec!["c1".into(), "c2".into()],
            alternatives: vec![NamedValues::new("a1", [8.5, 18.0])],
            profiles: vec![
                NamedValues::new("b1", [10.0, 15.0]),
                NamedValues::new("b2", [15.0, 20.0]),
            ],
            thresholds: vec![
                ThresholdInput {
                    criterion: "c1".into(),
                    indifference: 1.0,
                    preference: 2.0,
                    veto: 4.0,
                },
                ThresholdInput {
                    criterion: "c2".into(),
                    indifference: 2.0,
                    preference: 4.0,
                    veto: 8.0,
                },
            ],
            weights: vec![
                WeightInput {
                    criterion: "c1".into(),
                    weight: 0.7,
                },
                WeightInput {
                    criterion: "c2".into(),
                    weight: 0.3,
                },
            ],
            credibility_threshold: Some(0.75),
        }
    }

    #[test]
    fn valid_input_becomes_problem() {
        let problem = input().into_problem(CredibilityThreshold::TYPICAL).unwrap();
        assert_eq!(problem.criterion_ids().len(), 2);
        assert_eq!(problem.profiles().len(), 2);
        assert_eq!(problem.credibility_threshold().value(), 0.75);
    }

    #[test]
    fn invalid_lambda_is_reported() {
        let mut bad = input();
        bad.credibility_threshold = Some(0.3);
        assert!(matches!(
            bad.into_problem(CredibilityThreshold::TYPICAL),
            Err(ElectreError::InvalidCredibilityThreshold { .. })
        ));
    }

    #[test]
    fn missing_weight_is_a_dimension_mismatch() {
        let mut bad = input();
        bad.weights.pop();
        assert!(matches!(
            bad.into_problem(CredibilityThreshold::TYPICAL),
            Err(ElectreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn missing_lambda_takes_default() {
        let mut open = input();
        open.credibility_threshold = None;
        let default = CredibilityThreshold::try_new(0.6).unwrap();

        let problem = open.into_problem(default).unwrap();
        assert_eq!(problem.credibility_threshold(), default);
    }

    #[test]
    fn lambda_may_be_omitted_from_json() {
        let mut value = serde_json::to_value(input()).unwrap();
        value.as_object_mut().unwrap().remove("credibility_threshold");

        let parsed: ProblemInput = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.credibility_threshold, None);
    }

    #[test]
    fn input_deserializes_from_json() {
        let json = serde_json::to_string(&input()).unwrap();
        let parsed: ProblemInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input());
    }
}
