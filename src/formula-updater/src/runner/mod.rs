//! Orchestrates formula updates over a directory of definitions.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::scan_formulas;
use crate::formula::Formula;
use crate::git::{resolve_git_binary, GitCli, VersionControl};
use crate::hosting::{GitHubClient, HostingClient};
use crate::pipeline::{FormulaUpdatePipeline, UpdateOutcome};
use crate::summary::{ProcessingResult, RunSummary};
use tracing::{error, info, warn};

/// Runs the update pipeline for every configured formula.
pub struct Runner {
    config: RunnerConfig,
    pipeline: FormulaUpdatePipeline<GitCli, GitHubClient>,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// The git executable is resolved here, once per process.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let hosting = GitHubClient::new(config.token())?;
        let binary = config
            .git_binary()
            .map(|path| path.to_path_buf())
            .unwrap_or_else(resolve_git_binary);
        info!(binary = %binary.display(), "Using git executable");

        let git = GitCli::new(binary).with_remote(config.remote());
        let pipeline =
            FormulaUpdatePipeline::new(git, hosting).with_main_branch(config.main_branch());

        Ok(Self { config, pipeline })
    }

    /// Loads every formula and updates them one at a time.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        info!(path = %self.config.formulas_path().display(), "Loading formulas");
        let formulas = scan_formulas(self.config.formulas_path())?;

        if formulas.is_empty() {
            warn!("No formulas found");
            return Ok(summary);
        }

        info!(count = formulas.len(), "Found formulas");

        if self.config.dry_run() {
            summary.formulas_processed = formulas.len();
            print_dry_run_preview(&self.pipeline, &formulas);
            return Ok(summary);
        }

        process_formulas(&self.pipeline, &formulas, &mut summary).await;
        Ok(summary)
    }
}

/// Runs `formulas` through `pipeline` sequentially, recording each result.
///
/// Runs are never overlapped, so a working copy is only ever touched by one
/// pipeline at a time.
pub async fn process_formulas<G, H>(
    pipeline: &FormulaUpdatePipeline<G, H>,
    formulas: &[Formula],
    summary: &mut RunSummary,
) where
    G: VersionControl,
    H: HostingClient,
{
    for formula in formulas {
        let result = process_formula(pipeline, formula).await;
        summary.record_result(&result);
    }
}

async fn process_formula<G, H>(
    pipeline: &FormulaUpdatePipeline<G, H>,
    formula: &Formula,
) -> ProcessingResult
where
    G: VersionControl,
    H: HostingClient,
{
    info!(formula = %formula.name, version = %formula.version, "Processing formula");

    match pipeline.handle(formula).await {
        Ok(outcome) => {
            info!(
                formula = %formula.name,
                outcome = outcome.as_str(),
                "Formula processed"
            );
            match outcome {
                UpdateOutcome::PullRequestOpened(pr) => ProcessingResult::Updated {
                    formula: formula.name.clone(),
                    pr,
                },
                UpdateOutcome::NothingToCommit => ProcessingResult::Unchanged {
                    formula: formula.name.clone(),
                },
            }
        }
        Err(e) => {
            error!(
                formula = %formula.name,
                version = %formula.version,
                error = %e,
                "Failed to update formula"
            );
            ProcessingResult::Failed {
                formula: formula.name.clone(),
                error: e.to_string(),
            }
        }
    }
}

fn print_dry_run_preview<G, H>(pipeline: &FormulaUpdatePipeline<G, H>, formulas: &[Formula])
where
    G: VersionControl,
    H: HostingClient,
{
    for (i, formula) in formulas.iter().enumerate() {
        println!(
            "\n[DRY RUN] [{}/{}] {} {}",
            i + 1,
            formulas.len(),
            formula.name,
            formula.version
        );
        println!("  Formula file: {}", formula.file_path().display());
        println!("  Would create branch: {}", formula.branch_name());

        match formula.archive_url() {
            Ok(url) => println!("  Would set url: {url}"),
            Err(e) => println!("  Cannot derive url: {e}"),
        }
        println!(
            "  Would set {}: {}",
            formula.checksum.algorithm(),
            formula.checksum.digest()
        );

        match pipeline.pull_request_for(formula) {
            Ok(pr) => println!(
                "  Would open PR \"{}\" on {}/{} ({} -> {})",
                pr.title, pr.owner, pr.repo, pr.head, pr.base
            ),
            Err(e) => println!("  Cannot render PR: {e}"),
        }
    }

    println!();
}
