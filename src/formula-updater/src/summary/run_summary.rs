//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of formulas processed.
    pub formulas_processed: usize,

    /// Number of pull requests opened.
    pub prs_opened: usize,

    /// Number of formulas that were already up to date.
    pub unchanged: usize,

    /// Number of formulas that failed to update.
    pub failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.formulas_processed += 1;
        match result {
            ProcessingResult::Updated { .. } => self.prs_opened += 1,
            ProcessingResult::Unchanged { .. } => self.unchanged += 1,
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
