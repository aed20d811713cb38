//! Category Scanner - Optimistic and pessimistic assignment procedures.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::{Assignment, Category, ClassificationResult};
use crate::domain::foundation::{ElectreError, Outranking};
use crate::domain::outranking::PairTable;

/// Assignment procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Procedure {
    /// Ascending scan: the alternative goes below the first profile that
    /// is strictly preferred to it.
    Optimistic,
    /// Descending scan: the alternative goes above the last profile that
    /// it strictly beats.
    Pessimistic,
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Procedure::Optimistic => write!(f, "optimistic"),
            Procedure::Pessimistic => write!(f, "pessimistic"),
        }
    }
}

/// Assigns alternatives to categories from their outranking relations.
pub struct CategoryScanner;

impl CategoryScanner {
    /// Category index under the optimistic procedure.
    ///
    /// `relations` holds one alternative's relations to every profile,
    /// lowest profile first. Returns the index of the lowest profile that
    /// is `Preferred`, or the top category when there is none.
    pub fn optimistic_index(relations: &[Outranking]) -> usize {
        relations
            .iter()
            .position(|relation| *relation == Outranking::Preferred)
            .unwrap_or(relations.len())
    }

    /// Category index under the pessimistic procedure.
    ///
    /// Returns one above the highest profile that is `NotPreferred`, or the
    /// bottom category when there is none.
    pub fn pessimistic_index(relations: &[Outranking]) -> usize {
        relations
            .iter()
            .rposition(|relation| *relation == Outranking::NotPreferred)
            .map_or(0, |highest| highest + 1)
    }

    /// Category index under the given procedure.
    pub fn scan(relations: &[Outranking], procedure: Procedure) -> usize {
        match procedure {
            Procedure::Optimistic => Self::optimistic_index(relations),
            Procedure::Pessimistic => Self::pessimistic_index(relations),
        }
    }

    /// Assigns every alternative in the table.
    pub fn classify(
        outranking: &PairTable<Outranking>,
        procedure: Procedure,
    ) -> Result<ClassificationResult, ElectreError> {
        let categories = Category::all(outranking.profile_ids());

        let mut assignments = Vec::with_capacity(outranking.alternative_ids().len());
        for alternative in outranking.alternative_ids() {
            let relations = outranking.column(alternative.as_str()).ok_or_else(|| {
                ElectreError::dimension_mismatch("outranking", alternative, "relations are missing")
            })?;
            let index = Self::scan(&relations, procedure);
            assignments.push(Assignment {
                alternative_id: alternative.clone(),
                category: categories[index].clone(),
            });
        }

        debug!(
            %procedure,
            alternatives = assignments.len(),
            categories = categories.len(),
            "Assigned alternatives to categories"
        );
        Ok(ClassificationResult::new(procedure, categories, assignments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AlternativeId, ProfileId};
    use Outranking::*;

    #[test]
    fn optimistic_stops_at_first_preferred_profile() {
        assert_eq!(CategoryScanner::optimistic_index(&[Preferred, NotPreferred]), 0);
        assert_eq!(CategoryScanner::optimistic_index(&[NotPreferred, Preferred]), 1);
        assert_eq!(CategoryScanner::optimistic_index(&[Preferred, Preferred]), 0);
    }

    #[test]
    fn optimistic_without_preferred_profile_is_top() {
        assert_eq!(
            CategoryScanner::optimistic_index(&[Incomparable, Incomparable]),
            2
        );
        assert_eq!(CategoryScanner::optimistic_index(&[NotPreferred, Indifferent]), 2);
    }

    #[test]
    fn pessimistic_stops_at_last_beaten_profile() {
        assert_eq!(CategoryScanner::pessimistic_index(&[NotPreferred, Preferred]), 1);
        assert_eq!(CategoryScanner::pessimistic_index(&[NotPreferred, NotPreferred]), 2);
        assert_eq!(
            CategoryScanner::pessimistic_index(&[NotPreferred, Incomparable, Incomparable]),
            1
        );
    }

    #[test]
    fn pessimistic_without_beaten_profile_is_bottom() {
        assert_eq!(CategoryScanner::pessimistic_index(&[Incomparable, Preferred]), 0);
        assert_eq!(CategoryScanner::pessimistic_index(&[Indifferent, Indifferent]), 0);
    }

    #[test]
    fn incomparability_spreads_procedures_apart() {
        let relations = [NotPreferred, Incomparable, Incomparable, Preferred];
        assert_eq!(CategoryScanner::scan(&relations, Procedure::Optimistic), 3);
        assert_eq!(CategoryScanner::scan(&relations, Procedure::Pessimistic), 1);
    }

    #[test]
    fn classify_assigns_every_alternative() {
        let profiles = vec![ProfileId::new("b1").unwrap(), ProfileId::new("b2").unwrap()];
        let alternatives = vec![
            AlternativeId::new("a1").unwrap(),
            AlternativeId::new("a2").unwrap(),
            AlternativeId::new("a3").unwrap(),
        ];
        let relations = |b: &ProfileId, a: &AlternativeId| -> Result<Outranking, ElectreError> {
            Ok(match (b.as_str(), a.as_str()) {
                (_, "a1") => Preferred,
                ("b1", "a2") => NotPreferred,
                ("b2", "a2") => Preferred,
                _ => Incomparable,
            })
        };
        let table = PairTable::try_from_fn(&profiles, &alternatives, relations).unwrap();

        let optimistic = CategoryScanner::classify(&table, Procedure::Optimistic).unwrap();
        let pessimistic = CategoryScanner::classify(&table, Procedure::Pessimistic).unwrap();

        let labels = |result: &ClassificationResult| -> Vec<String> {
            result
                .assignments()
                .iter()
                .map(|a| a.category.to_string())
                .collect()
        };
        assert_eq!(labels(&optimistic), vec!["< b1", "(b1, b2)", "> b2"]);
        assert_eq!(labels(&pessimistic), vec!["< b1", "(b1, b2)", "< b1"]);
        assert_eq!(optimistic.procedure(), Procedure::Optimistic);
    }
}
