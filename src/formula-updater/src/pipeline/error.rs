//! Pipeline error types.

use thiserror::Error;

/// Failures that abort a formula update and propagate to the caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Formula values could not be derived.
    #[error(transparent)]
    Formula(#[from] crate::formula::FormulaError),

    /// Reading or writing the formula file failed.
    #[error(transparent)]
    Rewrite(#[from] crate::rewrite::RewriteError),

    /// The blocking rewrite task panicked or was cancelled.
    #[error("Formula rewrite task failed: {0}")]
    RewriteTask(#[from] tokio::task::JoinError),

    /// A git command failed.
    #[error(transparent)]
    Git(#[from] crate::git::GitError),

    /// The hosting API call failed.
    #[error(transparent)]
    Hosting(#[from] crate::hosting::HostingError),

    /// Rendering a title or body failed.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
