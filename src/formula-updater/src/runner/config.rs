//! Runner configuration.

use crate::git::DEFAULT_REMOTE;
use crate::pipeline::DEFAULT_MAIN_BRANCH;
use std::path::{Path, PathBuf};

/// Configuration for a batch of formula updates.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory holding formula definitions.
    formulas_path: PathBuf,
    /// GitHub token used for API calls.
    token: String,
    /// Whether to preview updates without touching git, files or the API.
    dry_run: bool,
    /// Git executable override; resolved from the filesystem when unset.
    git_binary: Option<PathBuf>,
    /// Trunk branch name.
    main_branch: String,
    /// Remote branches are pushed to.
    remote: String,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(formulas_path: PathBuf, token: String, dry_run: bool) -> Self {
        Self {
            formulas_path,
            token,
            dry_run,
            git_binary: None,
            main_branch: DEFAULT_MAIN_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    /// Sets an explicit git executable.
    pub fn with_git_binary(mut self, git_binary: PathBuf) -> Self {
        self.git_binary = Some(git_binary);
        self
    }

    /// Sets the trunk branch name.
    pub fn with_main_branch(mut self, main_branch: String) -> Self {
        self.main_branch = main_branch;
        self
    }

    /// Sets the push remote.
    pub fn with_remote(mut self, remote: String) -> Self {
        self.remote = remote;
        self
    }

    /// Returns the formulas directory path.
    pub fn formulas_path(&self) -> &Path {
        &self.formulas_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the git executable override, if any.
    pub fn git_binary(&self) -> Option<&Path> {
        self.git_binary.as_deref()
    }

    /// Returns the trunk branch name.
    pub fn main_branch(&self) -> &str {
        &self.main_branch
    }

    /// Returns the push remote.
    pub fn remote(&self) -> &str {
        &self.remote
    }
}
