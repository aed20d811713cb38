//! BatchClassifier - Classifies many independent problem instances.

use std::sync::Arc;

use tracing::{info, warn};

use super::{ElectreTri, EngineSettings, SortingOutcome};
use crate::domain::foundation::{ElectreError, ProblemId};
use crate::ports::{ProblemInput, ProblemSource, SourceError};

/// Outcome of one instance in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub id: ProblemId,
    pub outcome: Result<SortingOutcome, ElectreError>,
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-instance outcomes of a batch, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn items(&self) -> &[BatchItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets the item for a problem id.
    pub fn get(&self, id: &str) -> Option<&BatchItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Instances that classified successfully.
    pub fn succeeded(&self) -> impl Iterator<Item = (&ProblemId, &SortingOutcome)> {
        self.items
            .iter()
            .filter_map(|item| item.outcome.as_ref().ok().map(|o| (&item.id, o)))
    }

    /// Instances that failed validation.
    pub fn failed(&self) -> impl Iterator<Item = (&ProblemId, &ElectreError)> {
        self.items
            .iter()
            .filter_map(|item| item.outcome.as_ref().err().map(|e| (&item.id, e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }
}

/// Runs the engine over every instance of a `ProblemSource`.
///
/// A failing instance is reported in its own item and never affects the
/// others. Only a failure of the source itself aborts the batch.
pub struct BatchClassifier {
    source: Arc<dyn ProblemSource>,
    settings: EngineSettings,
}

impl BatchClassifier {
    pub fn new(source: Arc<dyn ProblemSource>) -> Self {
        Self {
            source,
            settings: EngineSettings::default(),
        }
    }

    /// Replaces the default engine settings.
    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Classifies every instance the source supplies.
    pub fn run(&self) -> Result<BatchReport, SourceError> {
        let inputs = self.source.problems()?;
        Ok(self.classify_all(inputs))
    }

    /// Classifies already-fetched instances.
    ///
    /// Inputs without a cutting level take the configured one.
    pub fn classify_all(&self, inputs: Vec<ProblemInput>) -> BatchReport {
        let default_threshold = self.settings.credibility_threshold;
        let items: Vec<BatchItem> = inputs
            .into_iter()
            .map(|input| {
                let id = input.id.clone();
                let outcome = input
                    .into_problem(default_threshold)
                    .and_then(|problem| ElectreTri::classify(&problem));
                if let Err(error) = &outcome {
                    warn!(problem = %id, code = %error.code(), %error, "Problem instance rejected");
                }
                BatchItem { id, outcome }
            })
            .collect();

        let report = BatchReport { items };
        info!(
            problems = report.len(),
            failed = report.failure_count(),
            "Batch classification finished"
        );
        report
    }
}
