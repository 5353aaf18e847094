//! Runner error types.

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Formula definitions could not be loaded.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Hosting(#[from] crate::hosting::HostingError),
}
