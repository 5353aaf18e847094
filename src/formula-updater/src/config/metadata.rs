//! Formula definition deserialization.

use crate::formula::{
    Fork, Upstream, DEFAULT_COMMIT_TITLE_FORMAT, DEFAULT_EXTENSION, DEFAULT_PR_BODY,
    DEFAULT_PR_TITLE_FORMAT,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Raw formula definition as written in a `.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FormulaMetadata {
    /// Formula name, optionally namespaced (e.g. "homebrew/core/widget").
    pub name: String,

    /// New release version.
    pub version: String,

    /// Archive URL with `{owner}`, `{name}` and `{version}` placeholders.
    pub archive_url_template: String,

    /// Project URL encoding `{owner}/{name}`.
    pub source_url: String,

    /// Checksum as `<algorithm>:<hexdigest>`.
    pub checksum: String,

    /// Local working copy holding the formula file.
    pub repository_path: PathBuf,

    /// Repository receiving the pull request.
    pub upstream: Upstream,

    /// Repository the branch is pushed from.
    pub fork: Fork,

    /// Formula file extension (defaults to "rb").
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Handlebars format for PR titles.
    #[serde(default = "default_pr_title_format")]
    pub pr_title_format: String,

    /// Handlebars format for commit titles.
    #[serde(default = "default_commit_title_format")]
    pub commit_title_format: String,

    /// Handlebars template for the PR body.
    #[serde(default = "default_pr_body")]
    pub pr_body: String,
}

pub(crate) fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

pub fn default_pr_title_format() -> String {
    DEFAULT_PR_TITLE_FORMAT.to_string()
}

pub fn default_commit_title_format() -> String {
    DEFAULT_COMMIT_TITLE_FORMAT.to_string()
}

pub fn default_pr_body() -> String {
    DEFAULT_PR_BODY.to_string()
}
