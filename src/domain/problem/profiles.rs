//! Profile Sequence - Ascending base profiles delimiting the categories.

use serde::Serialize;

use super::evaluation::{build_rows, parse_criteria, Evaluation};
use crate::domain::foundation::{CriterionId, ElectreError, ProfileId};

/// A base profile with its value on each criterion.
pub type Profile = Evaluation<ProfileId>;

/// Base profiles b1..bk, non-decreasing on every criterion.
///
/// k profiles delimit k + 1 categories. The scans in the classification
/// module are only correct when this ordering holds, so it is checked on
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSequence {
    criterion_ids: Vec<CriterionId>,
    profiles: Vec<Profile>,
}

impl ProfileSequence {
    /// Creates a builder for constructing a profile sequence.
    pub fn builder() -> ProfileSequenceBuilder {
        ProfileSequenceBuilder::new()
    }

    /// Ordered criterion ids.
    pub fn criterion_ids(&self) -> &[CriterionId] {
        &self.criterion_ids
    }

    /// Profiles from lowest to highest.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Profile ids from lowest to highest.
    pub fn profile_ids(&self) -> Vec<ProfileId> {
        self.profiles.iter().map(|b| b.id().clone()).collect()
    }

    /// Gets a profile by id.
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|b| b.id().as_str() == id)
    }

    /// Returns the number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false for a built sequence; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Returns the number of categories (profiles + 1).
    pub fn category_count(&self) -> usize {
        self.profiles.len() + 1
    }

    /// Checks that each profile is at least its predecessor on every criterion.
    fn ensure_ascending(&self) -> Result<(), ElectreError> {
        for pair in self.profiles.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            for criterion in &self.criterion_ids {
                let below = lower.value(criterion);
                let above = upper.value(criterion);
                if let (Some(below), Some(above)) = (below, above) {
                    if above < below {
                        return Err(ElectreError::NonMonotonicProfiles {
                            criterion: criterion.clone(),
                            lower: lower.id().clone(),
                            upper: upper.id().clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Builder for constructing ProfileSequence instances.
#[derive(Debug, Default)]
pub struct ProfileSequenceBuilder {
    criteria: Vec<String>,
    rows: Vec<(String, Vec<f64>)>,
}

impl ProfileSequenceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criteria, in the order profile values are given.
    pub fn criteria<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Appends the next (higher) profile.
    pub fn profile(mut self, id: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        self.rows.push((id.into(), values.into_iter().collect()));
        self
    }

    /// Builds the profile sequence.
    ///
    /// # Errors
    /// - `EmptyInput` if there are no criteria or no profiles
    /// - `NonMonotonicProfiles` if a profile is below its predecessor
    /// - `DimensionMismatch` for duplicate ids or rows of the wrong length
    pub fn build(self) -> Result<ProfileSequence, ElectreError> {
        let criterion_ids = parse_criteria("profile sequence", self.criteria)?;
        if self.rows.is_empty() {
            return Err(ElectreError::EmptyInput { what: "profiles" });
        }
        let profiles = build_rows("profile sequence", &criterion_ids, self.rows, ProfileId::new)?;

        let sequence = ProfileSequence {
            criterion_ids,
            profiles,
        };
        sequence.ensure_ascending()?;
        Ok(sequence)
    }
}
