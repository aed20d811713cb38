//! Worst/best bounds per criterion.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, ElectreError, ProfileId, ValidationError};

/// Worst and best attainable value of one criterion, worst <= best.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionBounds {
    worst: f64,
    best: f64,
}

impl CriterionBounds {
    pub fn worst(&self) -> f64 {
        self.worst
    }

    pub fn best(&self) -> f64 {
        self.best
    }

    /// Distance from worst to best.
    pub fn range(&self) -> f64 {
        self.best - self.worst
    }

    /// Point at `fraction` of the way from worst to best.
    pub fn interpolate(&self, fraction: f64) -> f64 {
        self.worst + fraction * self.range()
    }
}

/// Bounds of every criterion, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsTable {
    criterion_ids: Vec<CriterionId>,
    bounds: HashMap<CriterionId, CriterionBounds>,
}

impl BoundsTable {
    pub fn builder() -> BoundsTableBuilder {
        BoundsTableBuilder::new()
    }

    pub fn criterion_ids(&self) -> &[CriterionId] {
        &self.criterion_ids
    }

    pub fn get(&self, criterion: &CriterionId) -> Option<CriterionBounds> {
        self.bounds.get(criterion).copied()
    }

    /// Iterates over (criterion, bounds) in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&CriterionId, CriterionBounds)> + '_ {
        self.criterion_ids
            .iter()
            .filter_map(move |id| self.get(id).map(|b| (id, b)))
    }
}

/// Builder for constructing BoundsTable instances.
#[derive(Debug, Default)]
pub struct BoundsTableBuilder {
    rows: Vec<(String, f64, f64)>,
}

impl BoundsTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the worst and best value of a criterion.
    pub fn bounds(mut self, id: impl Into<String>, worst: f64, best: f64) -> Self {
        self.rows.push((id.into(), worst, best));
        self
    }

    /// Builds the bounds table.
    ///
    /// # Errors
    /// - `EmptyInput` if no criterion is given
    /// - `NonMonotonicProfiles` if worst > best, naming the "worst" and "best" profiles
    /// - `DimensionMismatch` for a duplicate criterion
    pub fn build(self) -> Result<BoundsTable, ElectreError> {
        if self.rows.is_empty() {
            return Err(ElectreError::EmptyInput { what: "bounds" });
        }

        let mut criterion_ids = Vec::with_capacity(self.rows.len());
        let mut bounds = HashMap::with_capacity(self.rows.len());
        for (id, worst, best) in self.rows {
            let criterion = CriterionId::new(id)?;
            if !worst.is_finite() || !best.is_finite() {
                return Err(ValidationError::not_finite(format!("{}.bounds", criterion)).into());
            }
            if worst > best {
                return Err(ElectreError::NonMonotonicProfiles {
                    criterion,
                    lower: ProfileId::new("worst")?,
                    upper: ProfileId::new("best")?,
                });
            }
            if bounds
                .insert(criterion.clone(), CriterionBounds { worst, best })
                .is_some()
            {
                return Err(ElectreError::dimension_mismatch(
                    "bounds table",
                    &criterion,
                    "criterion is declared twice",
                ));
            }
            criterion_ids.push(criterion);
        }

        Ok(BoundsTable {
            criterion_ids,
            bounds,
        })
    }
}
