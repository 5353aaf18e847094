//! Hosting error types.

use thiserror::Error;

/// Errors that can occur while talking to the hosting API.
#[derive(Debug, Error)]
pub enum HostingError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
