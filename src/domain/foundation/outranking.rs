//! Four-valued outranking relation between a base profile and an alternative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation of a base profile `b` to an alternative `a`, read as "b versus a".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outranking {
    /// b ≻ a: the profile outranks the alternative and not conversely.
    Preferred,
    /// b ≺ a: the alternative outranks the profile and not conversely.
    NotPreferred,
    /// b I a: each outranks the other.
    Indifferent,
    /// b R a: neither outranks the other.
    Incomparable,
}

impl Outranking {
    /// Builds the relation from the two crisp outranking statements.
    ///
    /// `alternative_outranks` is "a S b", `profile_outranks` is "b S a".
    pub fn from_statements(alternative_outranks: bool, profile_outranks: bool) -> Self {
        match (alternative_outranks, profile_outranks) {
            (true, true) => Outranking::Indifferent,
            (true, false) => Outranking::NotPreferred,
            (false, true) => Outranking::Preferred,
            (false, false) => Outranking::Incomparable,
        }
    }

    /// Returns the conventional symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Outranking::Preferred => "≻",
            Outranking::NotPreferred => "≺",
            Outranking::Indifferent => "I",
            Outranking::Incomparable => "R",
        }
    }

    /// Returns true for a strict preference in either direction.
    pub fn is_strict(&self) -> bool {
        matches!(self, Outranking::Preferred | Outranking::NotPreferred)
    }
}

impl fmt::Display for Outranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
