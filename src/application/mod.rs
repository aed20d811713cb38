//! Application layer - Sorting services and batch orchestration.
//!
//! This layer composes domain operations and coordinates with ports.

mod batch;
mod electre_tri;
mod settings;

pub use batch::{BatchClassifier, BatchItem, BatchReport};
pub use electre_tri::{
    DirectedTables, Diagnostics, ElectreTri, EquidistantProblem, SortingOutcome,
};
pub use settings::EngineSettings;
