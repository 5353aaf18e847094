//! Git error types.

use thiserror::Error;

/// Errors that can occur while driving the git executable.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git process could not be started.
    #[error("Failed to execute git {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Git exited with a non-zero status.
    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// Branch name is not a valid git reference.
    #[error("Invalid branch name '{name}': {message}")]
    InvalidBranch { name: String, message: String },
}
