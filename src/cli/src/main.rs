//! CLI for the formula updater.
//!
//! Bumps every configured formula to its new release and opens pull
//! requests upstream.

use clap::Parser;
use formula_updater::{RunSummary, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Formula Updater - Bump formula files to new releases and open upstream pull requests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the formula definitions folder.
    #[arg(long, default_value = "formulas/")]
    formulas_path: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN")]
    token: String,

    /// Preview updates without touching git, files or GitHub.
    #[arg(long)]
    dry_run: bool,

    /// Git executable; resolved from standard locations when omitted.
    #[arg(long, env = "FORMULA_UPDATER_GIT")]
    git_binary: Option<PathBuf>,

    /// Trunk branch checked out around each update and used as PR base.
    #[arg(long, default_value = "main")]
    main_branch: String,

    /// Remote the update branch is pushed to.
    #[arg(long, default_value = "origin")]
    remote: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with compact output and `RUST_LOG` filtering
/// (defaults to "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(args.formulas_path, args.token, args.dry_run)
        .with_main_branch(args.main_branch)
        .with_remote(args.remote);
    if let Some(path) = args.git_binary {
        config = config.with_git_binary(path);
    }
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Formulas processed: {}", summary.formulas_processed);

    if !summary.dry_run {
        println!("  PRs opened: {}", summary.prs_opened);
        println!("  Already up to date: {}", summary.unchanged);
        println!("  Failed: {}", summary.failed);
    }
}
