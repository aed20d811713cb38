//! Evaluation rows: one identified item scored on every criterion.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{CriterionId, ElectreError, ValidationError};

/// An item (alternative or base profile) with one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation<Id> {
    id: Id,
    values: HashMap<CriterionId, f64>,
}

impl<Id> Evaluation<Id> {
    /// Returns the identifier of the evaluated item.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Gets the value on a criterion.
    pub fn value(&self, criterion: &CriterionId) -> Option<f64> {
        self.values.get(criterion).copied()
    }
}

/// Parses and checks an ordered list of criterion ids.
pub(crate) fn parse_criteria(
    table: &'static str,
    raw: Vec<String>,
) -> Result<Vec<CriterionId>, ElectreError> {
    if raw.is_empty() {
        return Err(ElectreError::EmptyInput { what: "criteria" });
    }

    let mut seen = HashSet::new();
    let mut criteria = Vec::with_capacity(raw.len());
    for id in raw {
        let criterion = CriterionId::new(id)?;
        if !seen.insert(criterion.clone()) {
            return Err(ElectreError::dimension_mismatch(
                table,
                &criterion,
                "criterion is declared twice",
            ));
        }
        criteria.push(criterion);
    }
    Ok(criteria)
}

/// Turns positional rows into criterion-keyed evaluations.
///
/// Row values are matched to `criteria` by position; the result is keyed
/// by criterion id only.
pub(crate) fn build_rows<Id, F>(
    table: &'static str,
    criteria: &[CriterionId],
    rows: Vec<(String, Vec<f64>)>,
    make_id: F,
) -> Result<Vec<Evaluation<Id>>, ElectreError>
where
    Id: Clone + Eq + std::hash::Hash + std::fmt::Display,
    F: Fn(String) -> Result<Id, ValidationError>,
{
    let mut seen = HashSet::new();
    let mut evaluations = Vec::with_capacity(rows.len());

    for (raw_id, row) in rows {
        let id = make_id(raw_id)?;
        if !seen.insert(id.clone()) {
            return Err(ElectreError::dimension_mismatch(
                table,
                &id,
                "identifier is declared twice",
            ));
        }
        if row.len() != criteria.len() {
            return Err(ElectreError::dimension_mismatch(
                table,
                &id,
                "row length differs from the number of criteria",
            ));
        }

        let mut values = HashMap::with_capacity(criteria.len());
        for (criterion, value) in criteria.iter().zip(row) {
            if !value.is_finite() {
                return Err(ValidationError::not_finite(format!("{}.{}", id, criterion)).into());
            }
            values.insert(criterion.clone(), value);
        }

        evaluations.push(Evaluation { id, values });
    }

    Ok(evaluations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlternativeId;

    fn criteria() -> Vec<CriterionId> {
        parse_criteria("test", vec!["c1".to_string(), "c2".to_string()]).unwrap()
    }

    #[test]
    fn parse_criteria_rejects_empty_list() {
        let result = parse_criteria("test", Vec::new());
        assert_eq!(result, Err(ElectreError::EmptyInput { what: "criteria" }));
    }

    #[test]
    fn parse_criteria_rejects_duplicates() {
        let result = parse_criteria("test", vec!["c1".into(), "c1".into()]);
        assert!(matches!(result, Err(ElectreError::DimensionMismatch { .. })));
    }

    #[test]
    fn build_rows_keys_values_by_criterion() {
        let rows = build_rows(
            "test",
            &criteria(),
            vec![("a1".into(), vec![8.5, 18.0])],
            AlternativeId::new,
        )
        .unwrap();

        let c2 = CriterionId::new("c2").unwrap();
        assert_eq!(rows[0].id().as_str(), "a1");
        assert_eq!(rows[0].value(&c2), Some(18.0));
    }

    #[test]
    fn build_rows_rejects_short_rows() {
        let result = build_rows(
            "test",
            &criteria(),
            vec![("a1".into(), vec![8.5])],
            AlternativeId::new,
        );
        match result {
            Err(ElectreError::DimensionMismatch { subject, .. }) => assert_eq!(subject, "a1"),
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn build_rows_rejects_nan() {
        let result = build_rows(
            "test",
            &criteria(),
            vec![("a1".into(), vec![f64::NAN, 1.0])],
            AlternativeId::new,
        );
        assert!(matches!(
            result,
            Err(ElectreError::Validation(ValidationError::NotFinite { .. }))
        ));
    }
}
