//! ElectreTri - End-to-end sorting of a problem instance.
//!
//! Runs the outranking pipeline in both directions, derives the relation
//! table and applies both assignment procedures. Every intermediate table
//! is kept in the returned `Diagnostics`.

use serde::Serialize;
use tracing::{debug, info};

use super::EngineSettings;
use crate::domain::classification::{CategoryScanner, ClassificationResult, Procedure};
use crate::domain::foundation::{CredibilityThreshold, ElectreError, Outranking};
use crate::domain::outranking::{
    CredibilityEngine, Direction, GlobalAggregator, OutrankingClassifier, PairTable,
    PartialComparator, PartialScoreTable,
};
use crate::domain::problem::{PerformanceMatrix, SortingProblem, WeightVector};
use crate::domain::synthesis::{BoundsTable, ProfileSynthesizer, SynthesisSettings};

/// Intermediate tables of one direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectedTables {
    pub partial_concordance: PartialScoreTable,
    pub partial_discordance: PartialScoreTable,
    pub global_concordance: PairTable<f64>,
    pub credibility: PairTable<f64>,
}

impl DirectedTables {
    pub fn direction(&self) -> Direction {
        self.partial_concordance.direction()
    }
}

/// Every intermediate table of a sorting run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    /// "alternative outranks profile" tables.
    pub alternative_to_profile: DirectedTables,
    /// "profile outranks alternative" tables.
    pub profile_to_alternative: DirectedTables,
    pub outranking: PairTable<Outranking>,
}

impl Diagnostics {
    /// Tables of the given direction.
    pub fn directed(&self, direction: Direction) -> &DirectedTables {
        match direction {
            Direction::AlternativeToProfile => &self.alternative_to_profile,
            Direction::ProfileToAlternative => &self.profile_to_alternative,
        }
    }
}

/// Both classifications of a problem plus its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortingOutcome {
    credibility_threshold: CredibilityThreshold,
    optimistic: ClassificationResult,
    pessimistic: ClassificationResult,
    diagnostics: Diagnostics,
}

impl SortingOutcome {
    pub fn credibility_threshold(&self) -> CredibilityThreshold {
        self.credibility_threshold
    }

    pub fn optimistic(&self) -> &ClassificationResult {
        &self.optimistic
    }

    pub fn pessimistic(&self) -> &ClassificationResult {
        &self.pessimistic
    }

    /// Result of the given procedure.
    pub fn result(&self, procedure: Procedure) -> &ClassificationResult {
        match procedure {
            Procedure::Optimistic => &self.optimistic,
            Procedure::Pessimistic => &self.pessimistic,
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Alternatives whose two procedures disagree.
    pub fn ambiguous_alternatives(&self) -> Vec<&str> {
        self.optimistic
            .assignments()
            .iter()
            .filter(|a| {
                self.pessimistic
                    .category_of(a.alternative_id.as_str())
                    .map_or(true, |c| c.index() != a.category.index())
            })
            .map(|a| a.alternative_id.as_str())
            .collect()
    }
}

/// A problem whose profiles and thresholds are synthesized from bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquidistantProblem {
    performance: PerformanceMatrix,
    bounds: BoundsTable,
    weights: WeightVector,
    credibility_threshold: CredibilityThreshold,
}

impl EquidistantProblem {
    /// Assembles the inputs, checking the cutting level.
    ///
    /// Criterion agreement is checked once profiles are synthesized.
    pub fn new(
        performance: PerformanceMatrix,
        bounds: BoundsTable,
        weights: WeightVector,
        credibility_threshold: f64,
    ) -> Result<Self, ElectreError> {
        Ok(Self {
            performance,
            bounds,
            weights,
            credibility_threshold: CredibilityThreshold::try_new(credibility_threshold)?,
        })
    }

    /// Assembles the inputs with the cutting level from engine settings.
    pub fn configured(
        performance: PerformanceMatrix,
        bounds: BoundsTable,
        weights: WeightVector,
        settings: &EngineSettings,
    ) -> Self {
        Self {
            performance,
            bounds,
            weights,
            credibility_threshold: settings.credibility_threshold,
        }
    }

    pub fn performance(&self) -> &PerformanceMatrix {
        &self.performance
    }

    pub fn bounds(&self) -> &BoundsTable {
        &self.bounds
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn credibility_threshold(&self) -> CredibilityThreshold {
        self.credibility_threshold
    }

    /// Synthesizes profiles and thresholds into a full problem.
    pub fn to_problem(&self, settings: &SynthesisSettings) -> Result<SortingProblem, ElectreError> {
        let (profiles, thresholds) = ProfileSynthesizer::synthesize(&self.bounds, settings)?;
        SortingProblem::new(
            self.performance.clone(),
            profiles,
            thresholds,
            self.weights.clone(),
            self.credibility_threshold.value(),
        )
    }
}

/// ELECTRE Tri-B sorting service.
///
/// Stateless; every call recomputes all tables from its input.
pub struct ElectreTri;

impl ElectreTri {
    /// Classifies every alternative of a validated problem.
    pub fn classify(problem: &SortingProblem) -> Result<SortingOutcome, ElectreError> {
        let alternative_to_profile = Self::directed(problem, Direction::AlternativeToProfile)?;
        let profile_to_alternative = Self::directed(problem, Direction::ProfileToAlternative)?;

        let credibility_threshold = problem.credibility_threshold();
        let outranking = OutrankingClassifier::outrank(
            &alternative_to_profile.credibility,
            &profile_to_alternative.credibility,
            credibility_threshold,
        )?;

        let optimistic = CategoryScanner::classify(&outranking, Procedure::Optimistic)?;
        let pessimistic = CategoryScanner::classify(&outranking, Procedure::Pessimistic)?;

        let outcome = SortingOutcome {
            credibility_threshold,
            optimistic,
            pessimistic,
            diagnostics: Diagnostics {
                alternative_to_profile,
                profile_to_alternative,
                outranking,
            },
        };

        info!(
            alternatives = problem.performance().alternative_count(),
            profiles = problem.profiles().len(),
            criteria = problem.criterion_ids().len(),
            %credibility_threshold,
            ambiguous = outcome.ambiguous_alternatives().len(),
            "Classified alternatives"
        );
        Ok(outcome)
    }

    /// Synthesizes profiles and thresholds, then classifies.
    pub fn classify_equidistant(
        problem: &EquidistantProblem,
        settings: &SynthesisSettings,
    ) -> Result<SortingOutcome, ElectreError> {
        debug!(
            base_profiles = settings.base_profiles,
            "Classifying against synthesized profiles"
        );
        Self::classify(&problem.to_problem(settings)?)
    }

    fn directed(
        problem: &SortingProblem,
        direction: Direction,
    ) -> Result<DirectedTables, ElectreError> {
        let partial_concordance = PartialComparator::concordance_table(problem, direction)?;
        let partial_discordance = PartialComparator::discordance_table(problem, direction)?;
        let global_concordance = GlobalAggregator::aggregate(&partial_concordance, problem.weights())?;
        let credibility = CredibilityEngine::credibility(&global_concordance, &partial_discordance)?;

        Ok(DirectedTables {
            partial_concordance,
            partial_discordance,
            global_concordance,
            credibility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::problem::{ProfileSequence, ThresholdTable};

    fn reference(lambda: f64) -> SortingProblem {
        SortingProblem::new(
            PerformanceMatrix::builder()
                .criteria(["c1", "c2"])
                .alternative("a1", [8.5, 18.0])
                .alternative("a2", [14.0, 16.0])
                .alternative("a3", [5.0, 27.0])
                .build()
                .unwrap(),
            ProfileSequence::builder()
                .criteria(["c1", "c2"])
                .profile("b1", [10.0, 15.0])
                .profile("b2", [15.0, 20.0])
                .build()
                .unwrap(),
            ThresholdTable::builder()
                .criterion("c1", 1.0, 2.0, 4.0)
                .criterion("c2", 2.0, 4.0, 8.0)
                .build()
                .unwrap(),
            WeightVector::builder()
                .weight("c1", 0.7)
                .weight("c2", 0.3)
                .build()
                .unwrap(),
            lambda,
        )
        .unwrap()
    }

    fn indices(result: &ClassificationResult) -> Vec<usize> {
        result.assignments().iter().map(|a| a.category.index()).collect()
    }

    #[test]
    fn reference_problem_is_classified() {
        let outcome = ElectreTri::classify(&reference(0.75)).unwrap();
        assert_eq!(indices(outcome.optimistic()), vec![0, 1, 2]);
        assert_eq!(indices(outcome.pessimistic()), vec![0, 1, 0]);
        assert_eq!(outcome.ambiguous_alternatives(), vec!["a3"]);
    }

    #[test]
    fn diagnostics_expose_both_directions() {
        let outcome = ElectreTri::classify(&reference(0.75)).unwrap();
        let ab = outcome.diagnostics().directed(Direction::AlternativeToProfile);
        let ba = outcome.diagnostics().directed(Direction::ProfileToAlternative);

        assert_eq!(ab.direction(), Direction::AlternativeToProfile);
        assert!((ab.global_concordance.get("b1", "a1").unwrap() - 0.65).abs() < 1e-9);
        assert!((ba.credibility.get("b2", "a3").unwrap() - 0.7 * 0.25 / 0.3).abs() < 1e-9);
        assert_eq!(
            outcome.diagnostics().outranking.get("b1", "a2"),
            Some(Outranking::NotPreferred)
        );
    }

    #[test]
    fn lower_lambda_lifts_a2_optimistically() {
        let outcome = ElectreTri::classify(&reference(0.7)).unwrap();
        assert_eq!(outcome.optimistic().category_of("a2").unwrap().index(), 2);
        assert_eq!(outcome.pessimistic().category_of("a2").unwrap().index(), 1);
    }

    #[test]
    fn result_selects_procedure() {
        let outcome = ElectreTri::classify(&reference(0.75)).unwrap();
        assert_eq!(
            outcome.result(Procedure::Pessimistic).procedure(),
            Procedure::Pessimistic
        );
    }

    #[test]
    fn equidistant_problem_checks_lambda() {
        let result = EquidistantProblem::new(
            PerformanceMatrix::builder()
                .criteria(["c1"])
                .alternative("a1", [1.0])
                .build()
                .unwrap(),
            BoundsTable::builder().bounds("c1", 0.0, 2.0).build().unwrap(),
            WeightVector::builder().weight("c1", 1.0).build().unwrap(),
            0.2,
        );
        assert!(matches!(
            result,
            Err(ElectreError::InvalidCredibilityThreshold { .. })
        ));
    }

    #[test]
    fn equidistant_problem_with_foreign_bounds_is_mismatch() {
        let problem = EquidistantProblem::new(
            PerformanceMatrix::builder()
                .criteria(["c1"])
                .alternative("a1", [1.0])
                .build()
                .unwrap(),
            BoundsTable::builder().bounds("c9", 0.0, 2.0).build().unwrap(),
            WeightVector::builder().weight("c1", 1.0).build().unwrap(),
            0.75,
        )
        .unwrap();
        assert!(matches!(
            ElectreTri::classify_equidistant(&problem, &SynthesisSettings::default()),
            Err(ElectreError::DimensionMismatch { .. })
        ));
    }
}
