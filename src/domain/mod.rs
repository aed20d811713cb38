//! Domain layer containing the ELECTRE Tri-B sorting logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, credibility threshold, relation enum, errors)
//! - `problem` - Validated input tables (performance, profiles, thresholds, weights)
//! - `outranking` - Concordance, discordance, credibility and outranking relations
//! - `classification` - Optimistic and pessimistic category assignment
//! - `synthesis` - Equidistant profiles and proportional thresholds from bounds

pub mod classification;
pub mod foundation;
pub mod outranking;
pub mod problem;
pub mod synthesis;
