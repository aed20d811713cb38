//! In-Memory Problem Source Adapter
//!
//! Serves problem instances held in memory.
//! Useful for testing and for callers that parse input themselves.

use std::sync::RwLock;

use crate::ports::{ProblemInput, ProblemSource, SourceError};

/// In-memory list of problem instances
#[derive(Debug, Default)]
pub struct InMemoryProblemSource {
    problems: RwLock<Vec<ProblemInput>>,
}

impl InMemoryProblemSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding the given instances
    pub fn with_problems(problems: impl IntoIterator<Item = ProblemInput>) -> Self {
        Self {
            problems: RwLock::new(problems.into_iter().collect()),
        }
    }

    /// Append an instance
    pub fn push(&self, problem: ProblemInput) -> Result<(), SourceError> {
        self.problems
            .write()
            .map_err(|_| SourceError::Unavailable("problem list lock poisoned".into()))?
            .push(problem);
        Ok(())
    }

    /// Get the number of stored instances
    pub fn len(&self) -> usize {
        self.problems.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProblemSource for InMemoryProblemSource {
    fn problems(&self) -> Result<Vec<ProblemInput>, SourceError> {
        self.problems
            .read()
            .map(|p| p.clone())
            .map_err(|_| SourceError::Unavailable("problem list lock poisoned".into()))
    }
}
