//! Formula error types.

use thiserror::Error;

/// Errors raised while deriving values from a formula.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// Checksum is not of the form `<algorithm>:<hexdigest>`.
    #[error("Invalid checksum spec '{spec}': {reason}")]
    InvalidChecksum { spec: String, reason: &'static str },

    /// Source URL path does not encode an owner and a name.
    #[error("Source URL '{url}' does not contain an owner/name path")]
    MissingRepository { url: String },
}
