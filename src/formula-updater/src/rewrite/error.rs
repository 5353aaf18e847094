//! Formula file rewrite error types.

use thiserror::Error;

/// Errors that can occur while rewriting a formula file.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Failed to read or write the formula file.
    #[error("Failed to access formula file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A substitution pattern did not compile.
    #[error("Invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),
}
