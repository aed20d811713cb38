//! Synthesis Module - Base profiles and thresholds from criterion bounds.
//!
//! An alternate entry point for users who know only the worst and best
//! value of each criterion. Its output feeds the engine unchanged.

mod bounds;
mod percentages;
mod synthesizer;

pub use bounds::{BoundsTable, BoundsTableBuilder, CriterionBounds};
pub use percentages::ThresholdPercentages;
pub use synthesizer::{ProfileSynthesizer, SynthesisSettings};
