//! Pipeline outcomes.

use crate::hosting::PullRequest;

/// How a formula update run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The formula was rewritten, pushed and a pull request opened.
    PullRequestOpened(PullRequest),

    /// The rewrite changed nothing; the branch was deleted.
    NothingToCommit,
}

impl UpdateOutcome {
    /// Returns the status as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PullRequestOpened(_) => "pull_request_opened",
            Self::NothingToCommit => "nothing_to_commit",
        }
    }
}
