//! Processing result types.

use crate::hosting::PullRequest;

/// Result of processing a single formula.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// A pull request was opened.
    Updated {
        /// Formula name.
        formula: String,
        /// Opened pull request.
        pr: PullRequest,
    },

    /// The formula file was already up to date.
    Unchanged {
        /// Formula name.
        formula: String,
    },

    /// Processing failed.
    Failed {
        /// Formula name.
        formula: String,
        /// Error message.
        error: String,
    },
}
