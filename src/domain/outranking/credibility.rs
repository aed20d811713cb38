//! Credibility Engine - Discordance-attenuated global concordance.
//!
//! The credibility index σ(x, y) is the global concordance C(x, y) weakened
//! by every criterion whose discordance exceeds it:
//!
//! ```text
//! σ = C                                   if no dis_c > C
//! σ = C · Π_{dis_c > C} (1 − dis_c) / (1 − C)   otherwise
//! ```
//!
//! This is the non-compensatory step of ELECTRE: a single strongly opposing
//! criterion can override a favourable aggregate, and an exact veto
//! (dis_c = 1) annihilates credibility whenever C < 1.

use tracing::{debug, trace};

use super::{PairTable, PartialScoreTable};
use crate::domain::foundation::ElectreError;

/// Credibility index of one pair.
///
/// When C = 1 no discordance can exceed it and σ = 1; the division by
/// (1 − C) is only reached for C < 1. The result never exceeds C.
pub fn credibility_index<I>(concordance: f64, discordances: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sigma = concordance;
    for discordance in discordances {
        if discordance > concordance {
            sigma *= (1.0 - discordance) / (1.0 - concordance);
        }
    }
    sigma.max(0.0).min(concordance)
}

/// Applies the veto rule to a global concordance table.
pub struct CredibilityEngine;

impl CredibilityEngine {
    /// Credibility of every pair, from global concordance and partial
    /// discordance computed in the same direction.
    pub fn credibility(
        concordance: &PairTable<f64>,
        discordance: &PartialScoreTable,
    ) -> Result<PairTable<f64>, ElectreError> {
        let mut vetoed = 0usize;

        let table = PairTable::try_from_fn(
            concordance.profile_ids(),
            concordance.alternative_ids(),
            |b, a| {
                let c = concordance.require("global concordance", b, a)?;
                let mut discordances = Vec::with_capacity(discordance.criterion_ids().len());
                for (_, scores) in discordance.iter() {
                    discordances.push(scores.require("partial discordance", b, a)?);
                }

                let sigma = credibility_index(c, discordances);
                if sigma == 0.0 && c > 0.0 {
                    vetoed += 1;
                    trace!(profile = %b, alternative = %a, concordance = c, "Outranking vetoed");
                }
                Ok(sigma)
            },
        )?;

        debug!(
            direction = discordance.direction().label(),
            vetoed,
            "Computed credibility indices"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_discordance_leaves_concordance() {
        assert_eq!(credibility_index(0.85, [0.0, 0.0]), 0.85);
        // discordance equal to C does not attenuate
        assert_eq!(credibility_index(0.6, [0.6, 0.2]), 0.6);
    }

    #[test]
    fn strong_discordance_attenuates() {
        // 0.7 * (1 - 0.75) / (1 - 0.7)
        let sigma = credibility_index(0.7, [0.0, 0.75]);
        assert!((sigma - 0.583_333_333_333).abs() < 1e-9);
    }

    #[test]
    fn several_discordant_criteria_multiply() {
        let sigma = credibility_index(0.5, [0.6, 0.8]);
        let expected = 0.5 * (0.4 / 0.5) * (0.2 / 0.5);
        assert!((sigma - expected).abs() < 1e-12);
    }

    #[test]
    fn full_veto_collapses_to_zero() {
        assert_eq!(credibility_index(0.3, [1.0, 0.0]), 0.0);
        assert_eq!(credibility_index(0.99, [0.0, 1.0]), 0.0);
    }

    #[test]
    fn unanimous_concordance_is_never_vetoed() {
        assert_eq!(credibility_index(1.0, [0.0, 0.5]), 1.0);
        assert_eq!(credibility_index(1.0, [1.0]), 1.0);
    }

    #[test]
    fn no_criteria_recovers_concordance() {
        assert_eq!(credibility_index(0.42, std::iter::empty()), 0.42);
    }

    #[test]
    fn credibility_never_exceeds_concordance() {
        for c in [0.0, 0.1, 0.5, 0.9, 1.0] {
            for d in [0.0, 0.2, 0.55, 0.95, 1.0] {
                assert!(credibility_index(c, [d, d / 2.0]) <= c);
            }
        }
    }
}
