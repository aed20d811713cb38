//! Identifier-keyed result tables shared by the outranking stages.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::foundation::{AlternativeId, CriterionId, ElectreError, ProfileId};

/// Which side of a (profile, alternative) pair plays the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// "alternative a outranks profile b": subject a, reference b.
    AlternativeToProfile,
    /// "profile b outranks alternative a": subject b, reference a.
    ProfileToAlternative,
}

impl Direction {
    /// Orders (alternative value, profile value) as (subject, reference).
    pub fn orient(&self, alternative: f64, profile: f64) -> (f64, f64) {
        match self {
            Direction::AlternativeToProfile => (alternative, profile),
            Direction::ProfileToAlternative => (profile, alternative),
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::AlternativeToProfile => "ab",
            Direction::ProfileToAlternative => "ba",
        }
    }
}

/// One value per (profile, alternative) pair.
///
/// Profiles keep their ascending order and alternatives their input order,
/// so iteration is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairTable<T> {
    profile_ids: Vec<ProfileId>,
    alternative_ids: Vec<AlternativeId>,
    cells: HashMap<ProfileId, HashMap<AlternativeId, T>>,
}

impl<T: Copy> PairTable<T> {
    /// Fills a table by evaluating `cell` on every pair.
    pub fn try_from_fn<F>(
        profile_ids: &[ProfileId],
        alternative_ids: &[AlternativeId],
        mut cell: F,
    ) -> Result<Self, ElectreError>
    where
        F: FnMut(&ProfileId, &AlternativeId) -> Result<T, ElectreError>,
    {
        let mut cells = HashMap::with_capacity(profile_ids.len());
        for profile in profile_ids {
            let mut row = HashMap::with_capacity(alternative_ids.len());
            for alternative in alternative_ids {
                row.insert(alternative.clone(), cell(profile, alternative)?);
            }
            cells.insert(profile.clone(), row);
        }

        Ok(Self {
            profile_ids: profile_ids.to_vec(),
            alternative_ids: alternative_ids.to_vec(),
            cells,
        })
    }

    /// Gets the value of a pair.
    pub fn get(&self, profile: &str, alternative: &str) -> Option<T> {
        self.cells.get(profile)?.get(alternative).copied()
    }

    /// Gets the value of a pair, failing with `DimensionMismatch` if absent.
    pub(crate) fn require(
        &self,
        table: &'static str,
        profile: &ProfileId,
        alternative: &AlternativeId,
    ) -> Result<T, ElectreError> {
        self.get(profile.as_str(), alternative.as_str())
            .ok_or_else(|| {
                ElectreError::dimension_mismatch(table, format!("{}/{}", profile, alternative), "pair is missing")
            })
    }

    /// Profiles in ascending order.
    pub fn profile_ids(&self) -> &[ProfileId] {
        &self.profile_ids
    }

    /// Alternatives in input order.
    pub fn alternative_ids(&self) -> &[AlternativeId] {
        &self.alternative_ids
    }

    /// Values of one alternative against every profile, lowest profile first.
    pub fn column(&self, alternative: &str) -> Option<Vec<T>> {
        self.profile_ids
            .iter()
            .map(|profile| self.get(profile.as_str(), alternative))
            .collect()
    }

    /// Iterates over (profile, alternative, value) in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProfileId, &AlternativeId, T)> + '_ {
        self.profile_ids.iter().flat_map(move |profile| {
            self.alternative_ids.iter().filter_map(move |alternative| {
                self.get(profile.as_str(), alternative.as_str())
                    .map(|value| (profile, alternative, value))
            })
        })
    }
}

/// One value per (criterion, profile, alternative).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialScoreTable {
    direction: Direction,
    criterion_ids: Vec<CriterionId>,
    by_criterion: HashMap<CriterionId, PairTable<f64>>,
}

impl PartialScoreTable {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            criterion_ids: Vec::new(),
            by_criterion: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, criterion: CriterionId, table: PairTable<f64>) {
        if self.by_criterion.insert(criterion.clone(), table).is_none() {
            self.criterion_ids.push(criterion);
        }
    }

    /// Direction the partial scores were computed in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Criteria in problem order.
    pub fn criterion_ids(&self) -> &[CriterionId] {
        &self.criterion_ids
    }

    /// Gets the pair table of one criterion.
    pub fn for_criterion(&self, criterion: &str) -> Option<&PairTable<f64>> {
        self.by_criterion.get(criterion)
    }

    /// Gets the partial score of (criterion, profile, alternative).
    pub fn get(&self, criterion: &str, profile: &str, alternative: &str) -> Option<f64> {
        self.for_criterion(criterion)?.get(profile, alternative)
    }

    /// Iterates over (criterion, pair table) in problem order.
    pub fn iter(&self) -> impl Iterator<Item = (&CriterionId, &PairTable<f64>)> + '_ {
        self.criterion_ids
            .iter()
            .filter_map(move |c| self.by_criterion.get(c).map(|table| (c, table)))
    }
}
