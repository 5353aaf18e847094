#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod formula;
pub mod git;
pub mod hosting;
pub mod pipeline;
pub mod rewrite;
pub mod runner;
pub mod summary;
pub mod templates;

pub use config::{load_formula, scan_formulas, ConfigError, FormulaMetadata};
pub use formula::{ChecksumSpec, Fork, Formula, FormulaError, RepoRef, Upstream};
pub use git::{resolve_git_binary, GitCli, GitError, VersionControl};
pub use hosting::{GitHubClient, HostingClient, HostingError, PullRequest, PullRequestRequest};
pub use pipeline::{FormulaUpdatePipeline, PipelineError, UpdateOutcome};
pub use rewrite::{
    rewrite_content, rewrite_formula_file, FileRewrite, RewriteError, RewrittenContent,
};
pub use runner::{process_formulas, Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use templates::{TemplateError, TemplateRenderer};
