//! Repository references used by a formula.

use serde::Deserialize;

/// Owner and name parsed from a formula's source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub user: String,

    /// Repository name.
    pub name: String,
}

/// Repository the pull request targets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Upstream {
    /// Upstream owner.
    pub owner: String,

    /// Upstream repository name.
    pub repo: String,
}

/// Source side of the pull request head reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fork {
    /// Fork owner.
    pub owner: String,
}
