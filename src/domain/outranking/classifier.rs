//! Outranking Classifier - Four-valued relation from two credibility indices.

use tracing::debug;

use super::PairTable;
use crate::domain::foundation::{CredibilityThreshold, ElectreError, Outranking};

/// Maps credibility indices and a cutting level onto an outranking relation.
pub struct OutrankingClassifier;

impl OutrankingClassifier {
    /// Relation of profile b to alternative a.
    ///
    /// | σ(a,b) ≥ λ | σ(b,a) ≥ λ | relation       |
    /// |------------|------------|----------------|
    /// | yes        | yes        | `Indifferent`  |
    /// | yes        | no         | `NotPreferred` |
    /// | no         | yes        | `Preferred`    |
    /// | no         | no         | `Incomparable` |
    pub fn relate(
        sigma_ab: f64,
        sigma_ba: f64,
        credibility_threshold: CredibilityThreshold,
    ) -> Outranking {
        Outranking::from_statements(
            credibility_threshold.is_met_by(sigma_ab),
            credibility_threshold.is_met_by(sigma_ba),
        )
    }

    /// Outranking relation of every (profile, alternative) pair.
    pub fn outrank(
        sigma_ab: &PairTable<f64>,
        sigma_ba: &PairTable<f64>,
        credibility_threshold: CredibilityThreshold,
    ) -> Result<PairTable<Outranking>, ElectreError> {
        let table = PairTable::try_from_fn(
            sigma_ab.profile_ids(),
            sigma_ab.alternative_ids(),
            |b, a| {
                let ab = sigma_ab.require("credibility (ab)", b, a)?;
                let ba = sigma_ba.require("credibility (ba)", b, a)?;
                Ok(Self::relate(ab, ba, credibility_threshold))
            },
        )?;

        let incomparable = table
            .iter()
            .filter(|(_, _, relation)| *relation == Outranking::Incomparable)
            .count();
        debug!(%credibility_threshold, incomparable, "Computed outranking relations");
        Ok(table)
    }
}
