//! Local version control through the git executable.
//!
//! [`VersionControl`] is the seam the pipeline talks to; [`GitCli`] is the
//! implementation that shells out to git inside the working copy.

mod binary;
mod error;

pub use binary::{resolve_git_binary, PREFERRED_GIT_PATH, SYSTEM_GIT_PATH};
pub use error::GitError;

use bstr::ByteSlice;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Remote branches are pushed to unless configured otherwise.
pub const DEFAULT_REMOTE: &str = "origin";

/// Operations the pipeline performs on a local working copy.
pub trait VersionControl {
    /// Switches the working copy to `branch`.
    fn checkout(&self, repo: &Path, branch: &str)
        -> impl Future<Output = Result<(), GitError>> + Send;

    /// Creates `branch` and switches to it. Fails if it already exists.
    fn create_branch(
        &self,
        repo: &Path,
        branch: &str,
    ) -> impl Future<Output = Result<(), GitError>> + Send;

    /// Force-deletes `branch`.
    fn delete_branch(
        &self,
        repo: &Path,
        branch: &str,
    ) -> impl Future<Output = Result<(), GitError>> + Send;

    /// Stages every change in the working copy.
    fn add_all(&self, repo: &Path) -> impl Future<Output = Result<(), GitError>> + Send;

    /// Commits staged changes with `message`.
    fn commit(&self, repo: &Path, message: &str)
        -> impl Future<Output = Result<(), GitError>> + Send;

    /// Pushes `branch` to the remote.
    fn push(&self, repo: &Path, branch: &str) -> impl Future<Output = Result<(), GitError>> + Send;
}

/// [`VersionControl`] backed by the git executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    binary: PathBuf,
    remote: String,
}

impl GitCli {
    /// Creates a client running `binary` and pushing to [`DEFAULT_REMOTE`].
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    /// Sets the remote branches are pushed to.
    #[must_use]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Returns the git executable in use.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Returns the push remote.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Runs a git command in `repo`, returning trimmed stdout.
    async fn run(&self, repo: &Path, args: &[&str]) -> Result<String, GitError> {
        let command = args.join(" ");
        debug!(repo = %repo.display(), command = %command, "Running git");

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(repo)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| GitError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed {
                command,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VersionControl for GitCli {
    async fn checkout(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.run(repo, &["checkout", branch]).await?;
        Ok(())
    }

    async fn create_branch(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        validate_branch_name(branch)?;
        self.run(repo, &["checkout", "-b", branch]).await?;
        Ok(())
    }

    async fn delete_branch(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.run(repo, &["branch", "-D", branch]).await?;
        Ok(())
    }

    async fn add_all(&self, repo: &Path) -> Result<(), GitError> {
        self.run(repo, &["add", "-A"]).await?;
        Ok(())
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<(), GitError> {
        self.run(repo, &["commit", "-m", message]).await?;
        Ok(())
    }

    async fn push(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.run(repo, &["push", "-u", &self.remote, branch]).await?;
        Ok(())
    }
}

/// Checks that `branch` is usable as a git reference name.
///
/// # Errors
///
/// Returns [`GitError::InvalidBranch`] describing the first violation.
pub fn validate_branch_name(branch: &str) -> Result<(), GitError> {
    gix_validate::reference::name_partial(branch.as_bytes().as_bstr())
        .map(|_| ())
        .map_err(|e| GitError::InvalidBranch {
            name: branch.to_string(),
            message: e.to_string(),
        })
}
