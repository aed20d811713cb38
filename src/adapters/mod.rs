//! Adapters - Implementations of port interfaces and process setup.
//!
//! - `InMemoryProblemSource` - In-memory `ProblemSource`
//! - `init_tracing` - Global tracing subscriber installation

mod in_memory_problem_source;
mod telemetry;

pub use in_memory_problem_source::InMemoryProblemSource;
pub use telemetry::init_tracing;
