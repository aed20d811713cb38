//! Threshold Model - Indifference, preference and veto thresholds per criterion.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, ElectreError};

/// Indifference (q), preference (p) and veto (v) thresholds of one criterion.
///
/// Invariant: 0 <= q <= p <= v, all finite. Equal thresholds are allowed and
/// turn the corresponding ramp into a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    indifference: f64,
    preference: f64,
    veto: f64,
}

impl Thresholds {
    /// Creates thresholds for `criterion`, checking 0 <= q <= p <= v.
    pub fn for_criterion(
        criterion: &CriterionId,
        indifference: f64,
        preference: f64,
        veto: f64,
    ) -> Result<Self, ElectreError> {
        let finite = indifference.is_finite() && preference.is_finite() && veto.is_finite();
        if !finite || indifference < 0.0 || indifference > preference || preference > veto {
            return Err(ElectreError::MalformedThresholds {
                criterion: criterion.clone(),
                q: indifference,
                p: preference,
                v: veto,
            });
        }
        Ok(Self {
            indifference,
            preference,
            veto,
        })
    }

    /// Indifference threshold q.
    pub fn indifference(&self) -> f64 {
        self.indifference
    }

    /// Preference threshold p.
    pub fn preference(&self) -> f64 {
        self.preference
    }

    /// Veto threshold v.
    pub fn veto(&self) -> f64 {
        self.veto
    }
}

/// Thresholds keyed by criterion.
///
/// The same thresholds apply against every base profile; profile-dependent
/// thresholds need one run per profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdTable {
    criterion_ids: Vec<CriterionId>,
    thresholds: HashMap<CriterionId, Thresholds>,
}

impl ThresholdTable {
    /// Creates a builder for constructing a threshold table.
    pub fn builder() -> ThresholdTableBuilder {
        ThresholdTableBuilder::new()
    }

    /// Criterion ids in declaration order.
    pub fn criterion_ids(&self) -> &[CriterionId] {
        &self.criterion_ids
    }

    /// Gets the thresholds of a criterion.
    pub fn get(&self, criterion: &CriterionId) -> Option<Thresholds> {
        self.thresholds.get(criterion).copied()
    }
}

/// Builder for constructing ThresholdTable instances.
#[derive(Debug, Default)]
pub struct ThresholdTableBuilder {
    rows: Vec<(String, f64, f64, f64)>,
}

impl ThresholdTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (q, p, v) for a criterion.
    pub fn criterion(
        mut self,
        id: impl Into<String>,
        indifference: f64,
        preference: f64,
        veto: f64,
    ) -> Self {
        self.rows.push((id.into(), indifference, preference, veto));
        self
    }

    /// Builds the threshold table.
    pub fn build(self) -> Result<ThresholdTable, ElectreError> {
        if self.rows.is_empty() {
            return Err(ElectreError::EmptyInput { what: "thresholds" });
        }

        let mut criterion_ids = Vec::with_capacity(self.rows.len());
        let mut thresholds = HashMap::with_capacity(self.rows.len());
        for (id, q, p, v) in self.rows {
            let criterion = CriterionId::new(id)?;
            let entry = Thresholds::for_criterion(&criterion, q, p, v)?;
            if thresholds.insert(criterion.clone(), entry).is_some() {
                return Err(ElectreError::dimension_mismatch(
                    "threshold table",
                    &criterion,
                    "criterion is declared twice",
                ));
            }
            criterion_ids.push(criterion);
        }

        Ok(ThresholdTable {
            criterion_ids,
            thresholds,
        })
    }
}
