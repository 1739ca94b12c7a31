//! Per-file outcomes of a run

use crate::FileError;
use cinseal_domain::{BatchId, Cin};
use std::time::Duration;

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Protected, stored and mailed
    Succeeded {
        /// Identifier used as password
        identifier: Cin,
    },

    /// Left out of the batch
    Skipped(FileError),
}

impl BatchOutcome {
    /// Whether the file went through every step
    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Succeeded { .. })
    }
}

/// Outcome of one file, tagged with its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Source filename
    pub filename: String,

    /// What happened
    pub outcome: BatchOutcome,
}

/// Outcomes of a whole run, in processing order
///
/// Non-matching directory entries never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Identifier shared by every record written in this run
    pub batch_id: BatchId,

    /// One entry per processed file
    pub outcomes: Vec<FileOutcome>,

    /// Wall time of the run
    pub elapsed: Duration,
}

impl BatchReport {
    /// Create an empty report
    pub fn new(batch_id: BatchId) -> Self {
        Self {
            batch_id,
            outcomes: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Append a file outcome
    pub fn record(&mut self, filename: impl Into<String>, outcome: BatchOutcome) {
        self.outcomes.push(FileOutcome {
            filename: filename.into(),
            outcome,
        });
    }

    /// Look up the outcome of a file
    pub fn outcome(&self, filename: &str) -> Option<&BatchOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.filename == filename)
            .map(|o| &o.outcome)
    }

    /// Number of processed files
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files that went through every step
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_success()).count()
    }

    /// Number of skipped files
    pub fn skipped(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Batch {}", self.batch_id),
            format!("Processed: {}", self.total()),
            format!("Succeeded: {}", self.succeeded()),
            format!("Skipped: {}", self.skipped()),
        ];

        let skipped: Vec<_> = self
            .outcomes
            .iter()
            .filter_map(|o| match &o.outcome {
                BatchOutcome::Skipped(reason) => Some((&o.filename, reason)),
                BatchOutcome::Succeeded { .. } => None,
            })
            .collect();

        if !skipped.is_empty() {
            lines.push(String::new());
            for (filename, reason) in skipped {
                lines.push(format!("  {}: {}", filename, reason));
            }
        }

        lines.join("\n")
    }
}
