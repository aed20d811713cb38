//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `ProblemSource` - Supplies named problem instances for batch runs

mod problem_source;

pub use problem_source::{
    NamedValues, ProblemInput, ProblemSource, SourceError, ThresholdInput, WeightInput,
};
