//! Categories delimited by consecutive base profiles.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::domain::foundation::ProfileId;

/// One of the k + 1 ordered categories delimited by k base profiles.
///
/// Index 0 lies below b1, index k lies above bk, and index i in between
/// lies in (b_i, b_{i+1}).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    index: usize,
    lower: Option<ProfileId>,
    upper: Option<ProfileId>,
}

impl Category {
    /// Builds all categories for ascending profiles, lowest first.
    pub fn all(profile_ids: &[ProfileId]) -> Vec<Category> {
        (0..=profile_ids.len())
            .map(|index| Category {
                index,
                lower: index.checked_sub(1).map(|i| profile_ids[i].clone()),
                upper: profile_ids.get(index).cloned(),
            })
            .collect()
    }

    /// Position in the ascending order of categories.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Profile bounding the category from below, if any.
    pub fn lower(&self) -> Option<&ProfileId> {
        self.lower.as_ref()
    }

    /// Profile bounding the category from above, if any.
    pub fn upper(&self) -> Option<&ProfileId> {
        self.upper.as_ref()
    }

    /// Returns true for the category below the lowest profile.
    pub fn is_bottom(&self) -> bool {
        self.lower.is_none()
    }

    /// Returns true for the category above the highest profile.
    pub fn is_top(&self) -> bool {
        self.upper.is_none()
    }

    /// Label of an alternative's membership, e.g. `∈ (b1, b2)`.
    pub fn membership(&self) -> String {
        match (&self.lower, &self.upper) {
            (Some(_), Some(_)) => format!("∈ {}", self),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.lower, &self.upper) {
            (None, Some(upper)) => write!(f, "< {}", upper),
            (Some(lower), Some(upper)) => write!(f, "({}, {})", lower, upper),
            (Some(lower), None) => write!(f, "> {}", lower),
            (None, None) => write!(f, "*"),
        }
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
