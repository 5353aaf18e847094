//! Shared helpers for integration tests.

#![allow(dead_code)]

use formula_updater::formula::{
    DEFAULT_COMMIT_TITLE_FORMAT, DEFAULT_PR_BODY, DEFAULT_PR_TITLE_FORMAT,
};
use formula_updater::{
    Fork, Formula, GitError, HostingClient, HostingError, PullRequest, PullRequestRequest,
    Upstream, VersionControl,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use url::Url;

pub const ORIGINAL_FORMULA: &str = r#"class Foo < Formula
  desc "Foo does things"
  homepage "https://example.com/foo"
  url "https://old/url"
  sha256 "deadbeef"
  license "MIT"

  def install
    bin.install "foo"
  end
end
"#;

/// Builds the `foo` 2.0.0 formula living in `repository_path`.
pub fn foo_formula(repository_path: &Path) -> Formula {
    Formula {
        name: "homebrew/tap/foo".to_string(),
        version: "2.0.0".to_string(),
        archive_url_template: "https://example.com/{owner}/{name}/{version}.tar.gz".to_string(),
        source_url: Url::parse("https://github.com/acme/foo").unwrap(),
        checksum: "sha256:cafef00d".parse().unwrap(),
        repository_path: repository_path.to_path_buf(),
        upstream: Upstream {
            owner: "upstream-org".to_string(),
            repo: "homebrew-tap".to_string(),
        },
        fork: Fork {
            owner: "acme-bot".to_string(),
        },
        extension: "rb".to_string(),
        pr_title_format: DEFAULT_PR_TITLE_FORMAT.to_string(),
        commit_title_format: DEFAULT_COMMIT_TITLE_FORMAT.to_string(),
        pr_body: DEFAULT_PR_BODY.to_string(),
    }
}

/// Version control double that records every call.
#[derive(Default)]
pub struct RecordingGit {
    calls: Mutex<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl RecordingGit {
    /// Fails every call whose recorded form starts with `prefix`.
    pub fn failing_on(prefix: &'static str) -> Self {
        Self {
            calls: Mutex::default(),
            fail_on: Some(prefix),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, repo: &Path, call: String) -> Result<(), GitError> {
        assert!(repo.is_dir(), "git called outside working copy: {repo:?}");
        let failed = self.fail_on.is_some_and(|prefix| call.starts_with(prefix));
        self.calls.lock().unwrap().push(call.clone());
        if failed {
            return Err(GitError::CommandFailed {
                command: call,
                stderr: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl VersionControl for RecordingGit {
    async fn checkout(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.record(repo, format!("checkout {branch}"))
    }

    async fn create_branch(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.record(repo, format!("checkout -b {branch}"))
    }

    async fn delete_branch(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.record(repo, format!("branch -D {branch}"))
    }

    async fn add_all(&self, repo: &Path) -> Result<(), GitError> {
        self.record(repo, "add -A".to_string())
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<(), GitError> {
        self.record(repo, format!("commit -m {message}"))
    }

    async fn push(&self, repo: &Path, branch: &str) -> Result<(), GitError> {
        self.record(repo, format!("push origin {branch}"))
    }
}

/// Hosting double that records pull request requests.
#[derive(Default)]
pub struct RecordingHosting {
    requests: Mutex<Vec<PullRequestRequest>>,
}

impl RecordingHosting {
    pub fn requests(&self) -> Vec<PullRequestRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HostingClient for RecordingHosting {
    async fn create_pull_request(
        &self,
        request: &PullRequestRequest,
    ) -> Result<PullRequest, HostingError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        Ok(PullRequest {
            number: requests.len() as u64,
            url: format!(
                "https://github.com/{}/{}/pull/{}",
                request.owner,
                request.repo,
                requests.len()
            ),
        })
    }
}

/// Path of the fixture formula definitions.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/formulas")
}
