//! Pull request creation on the hosting service.

mod error;
mod rate_limit;

pub use error::HostingError;
pub use rate_limit::{check_core_rate_limit, ensure_core_rate_limit, RateLimitInfo};

use octocrab::Octocrab;
use std::future::Future;
use tracing::debug;

/// Fields of a pull request to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    /// Upstream owner.
    pub owner: String,

    /// Upstream repository.
    pub repo: String,

    /// PR title.
    pub title: String,

    /// Head reference, `<fork owner>:<branch>`.
    pub head: String,

    /// Base branch on the upstream repository.
    pub base: String,

    /// PR body.
    pub body: String,
}

/// A pull request that was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number.
    pub number: u64,

    /// PR URL.
    pub url: String,
}

/// Hosting API used by the pipeline.
pub trait HostingClient {
    /// Opens a pull request.
    fn create_pull_request(
        &self,
        request: &PullRequestRequest,
    ) -> impl Future<Output = Result<PullRequest, HostingError>> + Send;
}

/// [`HostingClient`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self, HostingError> {
        let octocrab = Octocrab::builder().personal_token(token.into()).build()?;
        Ok(Self { octocrab })
    }

    /// Wraps an already configured client.
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

impl HostingClient for GitHubClient {
    async fn create_pull_request(
        &self,
        request: &PullRequestRequest,
    ) -> Result<PullRequest, HostingError> {
        ensure_core_rate_limit(&self.octocrab).await?;

        debug!(
            repo = %format!("{}/{}", request.owner, request.repo),
            head = %request.head,
            base = %request.base,
            "Creating pull request"
        );

        let pr = self
            .octocrab
            .pulls(&request.owner, &request.repo)
            .create(&request.title, &request.head, &request.base)
            .body(&request.body)
            .send()
            .await?;

        let url = pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| {
                format!(
                    "https://github.com/{}/{}/pull/{}",
                    request.owner, request.repo, pr.number
                )
            });

        Ok(PullRequest {
            number: pr.number,
            url,
        })
    }
}
