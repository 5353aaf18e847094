//! Formula description and the values derived from it.
//!
//! A [`Formula`] is immutable for the duration of a run. Everything the
//! pipeline needs beyond the raw fields (branch name, archive URL, file path)
//! is computed on demand.

mod checksum;
mod error;
mod repository;

pub use checksum::ChecksumSpec;
pub use error::FormulaError;
pub use repository::{Fork, RepoRef, Upstream};

use std::path::PathBuf;
use url::Url;

/// Default extension of formula files.
pub const DEFAULT_EXTENSION: &str = "rb";

/// Default format for PR titles.
pub const DEFAULT_PR_TITLE_FORMAT: &str = "{{name}} {{version}}";

/// Default format for commit titles.
pub const DEFAULT_COMMIT_TITLE_FORMAT: &str = "{{name}} {{version}}";

/// Attribution used as the PR body unless a formula overrides it.
pub const DEFAULT_PR_BODY: &str = "Created automatically by formula-updater.";

/// A versioned package descriptor to bump.
#[derive(Debug, Clone)]
pub struct Formula {
    /// Formula name, possibly prefixed with a `/`-separated namespace.
    pub name: String,

    /// New release version.
    pub version: String,

    /// Archive URL with `{owner}`, `{name}` and `{version}` placeholders.
    pub archive_url_template: String,

    /// Project URL whose path encodes `{owner}/{name}`.
    pub source_url: Url,

    /// Checksum of the new archive.
    pub checksum: ChecksumSpec,

    /// Local working copy holding the formula file.
    pub repository_path: PathBuf,

    /// Repository receiving the pull request.
    pub upstream: Upstream,

    /// Repository the branch is pushed from.
    pub fork: Fork,

    /// Formula file extension.
    pub extension: String,

    /// Handlebars format for PR titles.
    pub pr_title_format: String,

    /// Handlebars format for commit titles.
    pub commit_title_format: String,

    /// Handlebars template for the PR body.
    pub pr_body: String,
}

impl Formula {
    /// Short name: the last `/` segment of [`Formula::name`].
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Branch the update is committed on: `<short name>-<version>`.
    #[must_use]
    pub fn branch_name(&self) -> String {
        format!("{}-{}", self.short_name(), self.version)
    }

    /// Owner and name encoded in the source URL path.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::MissingRepository`] if the path has fewer than
    /// two non-empty segments.
    pub fn repo(&self) -> Result<RepoRef, FormulaError> {
        let missing = || FormulaError::MissingRepository {
            url: self.source_url.to_string(),
        };

        let mut segments = self
            .source_url
            .path_segments()
            .ok_or_else(missing)?
            .filter(|s| !s.is_empty());

        let user = segments.next().ok_or_else(missing)?;
        let name = segments.next().ok_or_else(missing)?;

        Ok(RepoRef {
            user: user.to_string(),
            name: name.strip_suffix(".git").unwrap_or(name).to_string(),
        })
    }

    /// Archive URL with every placeholder substituted.
    ///
    /// # Errors
    ///
    /// Propagates [`Formula::repo`] failures.
    pub fn archive_url(&self) -> Result<String, FormulaError> {
        let repo = self.repo()?;
        Ok(self
            .archive_url_template
            .replace("{owner}", &repo.user)
            .replace("{name}", &repo.name)
            .replace("{version}", &self.version))
    }

    /// Path of the formula file inside the working copy.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.repository_path.join(format!(
            "{}.{}",
            self.short_name().to_lowercase(),
            self.extension
        ))
    }
}
