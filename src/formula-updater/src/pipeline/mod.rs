//! The formula update pipeline.
//!
//! One run walks a fixed sequence of steps against a working copy:
//!
//! 1. Check out the main branch
//! 2. Create `<name>-<version>` and switch to it
//! 3. Rewrite the formula file
//! 4. Commit
//! 5. Push the branch
//! 6. Open a pull request upstream
//! 7. Check out the main branch again
//!
//! If step 3 changes nothing the run checks out main, deletes the branch and
//! ends with [`UpdateOutcome::NothingToCommit`]. Every other failure
//! propagates; the branch and any commit are left in place.

mod error;
mod outcome;

pub use error::PipelineError;
pub use outcome::UpdateOutcome;

use crate::formula::Formula;
use crate::git::VersionControl;
use crate::hosting::{HostingClient, PullRequest, PullRequestRequest};
use crate::rewrite::{rewrite_formula_file, FileRewrite};
use crate::templates::TemplateRenderer;
use tracing::{debug, info, info_span, warn, Instrument};

/// Default name of the trunk branch.
pub const DEFAULT_MAIN_BRANCH: &str = "main";

/// Updates formula files through injected git and hosting collaborators.
pub struct FormulaUpdatePipeline<G, H> {
    git: G,
    hosting: H,
    renderer: TemplateRenderer,
    main_branch: String,
}

impl<G, H> FormulaUpdatePipeline<G, H>
where
    G: VersionControl,
    H: HostingClient,
{
    /// Creates a pipeline targeting [`DEFAULT_MAIN_BRANCH`].
    pub fn new(git: G, hosting: H) -> Self {
        Self {
            git,
            hosting,
            renderer: TemplateRenderer::new(),
            main_branch: DEFAULT_MAIN_BRANCH.to_string(),
        }
    }

    /// Sets the trunk branch checked out around each run and used as PR base.
    #[must_use]
    pub fn with_main_branch(mut self, main_branch: impl Into<String>) -> Self {
        self.main_branch = main_branch.into();
        self
    }

    /// Returns the trunk branch name.
    pub fn main_branch(&self) -> &str {
        &self.main_branch
    }

    /// Returns the version control collaborator.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Returns the hosting collaborator.
    pub fn hosting(&self) -> &H {
        &self.hosting
    }

    /// Runs the full update for `formula`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] for any failure other than an unchanged
    /// formula file, which is recovered and reported as
    /// [`UpdateOutcome::NothingToCommit`].
    pub async fn handle(&self, formula: &Formula) -> Result<UpdateOutcome, PipelineError> {
        let span = info_span!(
            "update_formula",
            formula = %formula.name,
            version = %formula.version
        );

        async {
            let branch = formula.branch_name();

            self.checkout_main(formula).await?;
            self.git
                .create_branch(&formula.repository_path, &branch)
                .await?;

            if let FileRewrite::NothingToCommit = self.rewrite_formula_file(formula).await? {
                warn!(
                    formula = %formula.name,
                    version = %formula.version,
                    "Nothing to commit, reverting branch"
                );
                self.checkout_main(formula).await?;
                self.git
                    .delete_branch(&formula.repository_path, &branch)
                    .await?;
                return Ok(UpdateOutcome::NothingToCommit);
            }

            self.commit(formula).await?;
            self.git.push(&formula.repository_path, &branch).await?;
            let pr = self.open_pull_request(formula).await?;
            self.checkout_main(formula).await?;

            info!(pr_number = pr.number, url = %pr.url, "Pull request opened");
            Ok(UpdateOutcome::PullRequestOpened(pr))
        }
        .instrument(span)
        .await
    }

    async fn checkout_main(&self, formula: &Formula) -> Result<(), PipelineError> {
        self.git
            .checkout(&formula.repository_path, &self.main_branch)
            .await?;
        Ok(())
    }

    /// Rewrites the formula file on the blocking pool; the write holds a file lock.
    async fn rewrite_formula_file(&self, formula: &Formula) -> Result<FileRewrite, PipelineError> {
        let archive_url = formula.archive_url()?;
        let path = formula.file_path();
        let checksum = formula.checksum.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            rewrite_formula_file(&path, &archive_url, &checksum)
        })
        .await??;
        debug!(?outcome, "Formula file rewrite finished");
        Ok(outcome)
    }

    async fn commit(&self, formula: &Formula) -> Result<(), PipelineError> {
        let message = self.renderer.render_commit_title(formula)?;
        self.git.add_all(&formula.repository_path).await?;
        self.git.commit(&formula.repository_path, &message).await?;
        Ok(())
    }

    async fn open_pull_request(&self, formula: &Formula) -> Result<PullRequest, PipelineError> {
        let request = self.pull_request_for(formula)?;
        Ok(self.hosting.create_pull_request(&request).await?)
    }

    /// Builds the pull request `formula` would open.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Template`] if the title or body fails to render.
    pub fn pull_request_for(&self, formula: &Formula) -> Result<PullRequestRequest, PipelineError> {
        Ok(PullRequestRequest {
            owner: formula.upstream.owner.clone(),
            repo: formula.upstream.repo.clone(),
            title: self.renderer.render_pr_title(formula)?,
            head: format!("{}:{}", formula.fork.owner, formula.branch_name()),
            base: self.main_branch.clone(),
            body: self.renderer.render_pr_body(formula)?,
        })
    }
}
