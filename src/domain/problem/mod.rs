//! Problem Module - Input tables of an ELECTRE Tri-B run.
//!
//! # Components
//!
//! - `PerformanceMatrix` - Alternatives (rows) scored on criteria (A)
//! - `ProfileSequence` - Ascending base profiles (B)
//! - `ThresholdTable` - Per-criterion (q, p, v) thresholds (T)
//! - `WeightVector` - Criterion weights (w)
//! - `SortingProblem` - The four tables plus lambda, cross-checked
//!
//! Every table is built through a builder that validates its own invariants;
//! `SortingProblem::new` then checks that the tables agree with each other.

mod evaluation;
mod performance;
#[allow(clippy::module_inception)]
mod problem;
mod profiles;
mod thresholds;
mod weights;

pub use evaluation::Evaluation;
pub use performance::{Alternative, PerformanceMatrix, PerformanceMatrixBuilder};
pub use problem::SortingProblem;
pub use profiles::{Profile, ProfileSequence, ProfileSequenceBuilder};
pub use thresholds::{ThresholdTable, ThresholdTableBuilder, Thresholds};
pub use weights::{WeightVector, WeightVectorBuilder};
