//! Global Aggregator - Weighted global concordance per pair.

use tracing::debug;

use super::{PairTable, PartialScoreTable};
use crate::domain::foundation::ElectreError;
use crate::domain::problem::WeightVector;

/// Weighted mean of partial concordances.
///
/// `C = Σ (w_c · con_c) / Σ w_c`
///
/// # Errors
/// - `InvalidWeights` when the weights sum to zero or overflow
pub fn global_concordance<I>(weighted: I) -> Result<f64, ElectreError>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (numerator, total) = weighted
        .into_iter()
        .fold((0.0, 0.0), |(num, den), (weight, concordance)| {
            (num + weight * concordance, den + weight)
        });

    if total <= 0.0 {
        return Err(ElectreError::invalid_weights("sum of weights is zero"));
    }
    if !total.is_finite() {
        return Err(ElectreError::invalid_weights("sum of weights overflows"));
    }
    Ok((numerator / total).clamp(0.0, 1.0))
}

/// Combines partial concordances into global concordances.
pub struct GlobalAggregator;

impl GlobalAggregator {
    /// Global concordance of every (profile, alternative) pair, in the
    /// direction of `partial`.
    pub fn aggregate(
        partial: &PartialScoreTable,
        weights: &WeightVector,
    ) -> Result<PairTable<f64>, ElectreError> {
        let Some((_, first)) = partial.iter().next() else {
            return Err(ElectreError::EmptyInput { what: "criteria" });
        };

        let table = PairTable::try_from_fn(first.profile_ids(), first.alternative_ids(), |b, a| {
            let mut weighted = Vec::with_capacity(partial.criterion_ids().len());
            for (criterion, scores) in partial.iter() {
                let weight = weights.get(criterion).ok_or_else(|| {
                    ElectreError::dimension_mismatch("weight vector", criterion, "criterion is missing")
                })?;
                weighted.push((weight, scores.require("partial concordance", b, a)?));
            }
            global_concordance(weighted)
        })?;

        debug!(
            direction = partial.direction().label(),
            pairs = table.profile_ids().len() * table.alternative_ids().len(),
            "Computed global concordance"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_mean_of_reference_pair() {
        // C_ab[b1, a1] = 0.7 * 0.5 + 0.3 * 1
        let c = global_concordance([(0.7, 0.5), (0.3, 1.0)]).unwrap();
        assert!((c - 0.65).abs() < 1e-12);
    }

    #[test]
    fn weights_are_normalized_by_their_sum() {
        let c = global_concordance([(7.0, 0.5), (3.0, 1.0)]).unwrap();
        assert!((c - 0.65).abs() < 1e-12);
    }

    #[test]
    fn unanimous_concordance_is_exactly_one() {
        let c = global_concordance([(0.7, 1.0), (0.3, 1.0)]).unwrap();
        assert_eq!(c, 1.0);
    }

    #[test]
    fn zero_weight_sum_is_invalid() {
        let result = global_concordance([(0.0, 1.0), (0.0, 0.5)]);
        assert!(matches!(result, Err(ElectreError::InvalidWeights { .. })));
    }

    #[test]
    fn overflowing_weight_sum_is_invalid() {
        let result = global_concordance([(f64::MAX, 1.0), (f64::MAX, 1.0)]);
        assert!(matches!(result, Err(ElectreError::InvalidWeights { .. })));
    }

    #[test]
    fn no_criteria_is_invalid() {
        let result = global_concordance(std::iter::empty());
        assert!(matches!(result, Err(ElectreError::InvalidWeights { .. })));
    }
}
