//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects, the outranking relation and the
//! error types that form the vocabulary of the sorting engine.

mod credibility_threshold;
mod errors;
mod ids;
mod outranking;

pub use credibility_threshold::CredibilityThreshold;
pub use errors::{ElectreError, ErrorCode, ValidationError};
pub use ids::{AlternativeId, CriterionId, ProblemId, ProfileId};
pub use outranking::Outranking;
