//! Partial Comparator - Per-criterion concordance and discordance.

use tracing::debug;

use super::{Direction, PairTable, PartialScoreTable};
use crate::domain::foundation::{CriterionId, ElectreError};
use crate::domain::problem::{SortingProblem, Thresholds};

/// Partial concordance: truth of "x is at least as good as y" on one criterion.
///
/// ```text
/// con(x, y) = 1                      if x >= y - q
///           = 0                      if x <  y - p
///           = (x - y + p) / (p - q)  otherwise
/// ```
pub fn partial_concordance(x: f64, y: f64, thresholds: &Thresholds) -> f64 {
    let q = thresholds.indifference();
    let p = thresholds.preference();

    if x >= y - q {
        1.0
    } else if x < y - p {
        0.0
    } else {
        ramp(x - y + p, p - q, 0.0)
    }
}

/// Partial discordance: strength of the veto against "x is at least as good as y".
///
/// ```text
/// dis(x, y) = 0                      if x >= y - p
///           = 1                      if x <  y - v
///           = (y - x - p) / (v - p)  otherwise
/// ```
pub fn partial_discordance(x: f64, y: f64, thresholds: &Thresholds) -> f64 {
    let p = thresholds.preference();
    let v = thresholds.veto();

    if x >= y - p {
        0.0
    } else if x < y - v {
        1.0
    } else {
        ramp(y - x - p, v - p, 1.0)
    }
}

/// Linear ramp clamped to [0, 1].
///
/// A zero-width ramp is a step at the boundary; the branches above make it
/// unreachable, `collapsed` is its value past the boundary.
fn ramp(offset: f64, width: f64, collapsed: f64) -> f64 {
    if width > 0.0 {
        (offset / width).clamp(0.0, 1.0)
    } else {
        collapsed
    }
}

/// Which partial measure a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Measure {
    Concordance,
    Discordance,
}

/// Builds partial concordance and discordance tables for a problem.
pub struct PartialComparator;

impl PartialComparator {
    /// Partial concordance of every (criterion, profile, alternative) in one direction.
    pub fn concordance_table(
        problem: &SortingProblem,
        direction: Direction,
    ) -> Result<PartialScoreTable, ElectreError> {
        Self::table(problem, direction, Measure::Concordance)
    }

    /// Partial discordance of every (criterion, profile, alternative) in one direction.
    pub fn discordance_table(
        problem: &SortingProblem,
        direction: Direction,
    ) -> Result<PartialScoreTable, ElectreError> {
        Self::table(problem, direction, Measure::Discordance)
    }

    fn table(
        problem: &SortingProblem,
        direction: Direction,
        measure: Measure,
    ) -> Result<PartialScoreTable, ElectreError> {
        let performance = problem.performance();
        let profiles = problem.profiles();
        let profile_ids = profiles.profile_ids();
        let alternative_ids = performance.alternative_ids();

        let mut partial = PartialScoreTable::new(direction);
        for criterion in problem.criterion_ids() {
            let thresholds = problem.thresholds().get(criterion).ok_or_else(|| {
                ElectreError::dimension_mismatch("threshold table", criterion, "criterion is missing")
            })?;

            let table = PairTable::try_from_fn(&profile_ids, &alternative_ids, |b, a| {
                let profile_value = profiles
                    .profile(b.as_str())
                    .and_then(|profile| profile.value(criterion));
                let alternative_value = performance
                    .alternative(a.as_str())
                    .and_then(|alternative| alternative.value(criterion));

                let (Some(profile_value), Some(alternative_value)) =
                    (profile_value, alternative_value)
                else {
                    return Err(missing_value(criterion));
                };

                let (x, y) = direction.orient(alternative_value, profile_value);
                Ok(match measure {
                    Measure::Concordance => partial_concordance(x, y, &thresholds),
                    Measure::Discordance => partial_discordance(x, y, &thresholds),
                })
            })?;

            partial.insert(criterion.clone(), table);
        }

        debug!(
            direction = direction.label(),
            measure = ?measure,
            criteria = partial.criterion_ids().len(),
            "Computed partial scores"
        );
        Ok(partial)
    }
}

fn missing_value(criterion: &CriterionId) -> ElectreError {
    ElectreError::dimension_mismatch("performance matrix", criterion, "value is missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(q: f64, p: f64, v: f64) -> Thresholds {
        Thresholds::for_criterion(&CriterionId::new("c").unwrap(), q, p, v).unwrap()
    }

    // Partial Concordance Tests

    #[test]
    fn concordance_is_one_within_indifference() {
        let th = t(1.0, 2.0, 4.0);
        assert_eq!(partial_concordance(10.0, 10.0, &th), 1.0);
        assert_eq!(partial_concordance(9.0, 10.0, &th), 1.0); // exactly y - q
        assert_eq!(partial_concordance(25.0, 10.0, &th), 1.0);
    }

    #[test]
    fn concordance_is_zero_beyond_preference() {
        let th = t(1.0, 2.0, 4.0);
        assert_eq!(partial_concordance(7.9, 10.0, &th), 0.0);
        assert_eq!(partial_concordance(5.0, 10.0, &th), 0.0);
    }

    #[test]
    fn concordance_ramps_between_q_and_p() {
        let th = t(1.0, 2.0, 4.0);
        assert!((partial_concordance(8.5, 10.0, &th) - 0.5).abs() < 1e-12);
        // exactly y - p sits on the ramp and evaluates to 0
        assert_eq!(partial_concordance(8.0, 10.0, &th), 0.0);
    }

    #[test]
    fn concordance_with_equal_q_and_p_is_a_step() {
        let th = t(2.0, 2.0, 4.0);
        assert_eq!(partial_concordance(8.0, 10.0, &th), 1.0);
        assert_eq!(partial_concordance(7.999, 10.0, &th), 0.0);
    }

    // Partial Discordance Tests

    #[test]
    fn discordance_is_zero_within_preference() {
        let th = t(1.0, 2.0, 4.0);
        assert_eq!(partial_discordance(8.0, 10.0, &th), 0.0);
        assert_eq!(partial_discordance(12.0, 10.0, &th), 0.0);
    }

    #[test]
    fn discordance_is_one_beyond_veto() {
        let th = t(1.0, 2.0, 4.0);
        assert_eq!(partial_discordance(5.9, 10.0, &th), 1.0);
    }

    #[test]
    fn discordance_ramps_between_p_and_v() {
        let th = t(2.0, 4.0, 8.0);
        // y = 27, x = 20: (27 - 20 - 4) / (8 - 4)
        assert!((partial_discordance(20.0, 27.0, &th) - 0.75).abs() < 1e-12);
        // exactly y - v is still on the ramp and reaches 1
        assert_eq!(partial_discordance(19.0, 27.0, &th), 1.0);
    }

    #[test]
    fn discordance_with_equal_p_and_v_is_a_step() {
        let th = t(1.0, 2.0, 2.0);
        assert_eq!(partial_discordance(8.0, 10.0, &th), 0.0);
        assert_eq!(partial_discordance(7.999, 10.0, &th), 1.0);
    }

    #[test]
    fn all_zero_thresholds_compare_strictly() {
        let th = t(0.0, 0.0, 0.0);
        assert_eq!(partial_concordance(10.0, 10.0, &th), 1.0);
        assert_eq!(partial_concordance(9.0, 10.0, &th), 0.0);
        assert_eq!(partial_discordance(9.0, 10.0, &th), 1.0);
    }

    #[test]
    fn directions_are_independent_evaluations() {
        let th = t(1.0, 2.0, 4.0);
        let (x, y) = Direction::AlternativeToProfile.orient(14.0, 10.0);
        let ab = partial_concordance(x, y, &th);
        let (x, y) = Direction::ProfileToAlternative.orient(14.0, 10.0);
        let ba = partial_concordance(x, y, &th);
        assert_eq!(ab, 1.0);
        assert_eq!(ba, 0.0);
    }
}
