//! Outranking Module - Pairwise comparison of alternatives with base profiles.
//!
//! Data flows strictly downward through the stages:
//!
//! 1. `PartialComparator` - partial concordance and discordance per criterion
//! 2. `GlobalAggregator` - weighted global concordance per pair
//! 3. `CredibilityEngine` - veto-attenuated credibility per pair
//! 4. `OutrankingClassifier` - four-valued relation per pair
//!
//! Stages 1-3 run once per `Direction`. All functions are pure; every table
//! is keyed by typed identifiers and read-only once built.

mod classifier;
mod concordance;
mod credibility;
mod partial;
mod tables;

pub use classifier::OutrankingClassifier;
pub use concordance::{global_concordance, GlobalAggregator};
pub use credibility::{credibility_index, CredibilityEngine};
pub use partial::{partial_concordance, partial_discordance, PartialComparator};
pub use tables::{Direction, PairTable, PartialScoreTable};
