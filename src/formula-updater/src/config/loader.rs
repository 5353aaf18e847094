//! Loading and validating a single formula definition.

use crate::config::{ConfigError, FormulaMetadata};
use crate::formula::{ChecksumSpec, Formula};
use crate::git::validate_branch_name;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Loads a formula definition from a `.toml` file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, malformed, or fails
/// validation.
pub fn load_formula(path: &Path) -> Result<Formula, ConfigError> {
    debug!(path = %path.display(), "Loading formula definition");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let metadata: FormulaMetadata =
        toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

    build_formula(metadata, path)
}

/// Validates raw metadata and turns it into a [`Formula`].
fn build_formula(metadata: FormulaMetadata, path: &Path) -> Result<Formula, ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        path: path.display().to_string(),
        message,
    };

    if metadata.name.trim().is_empty() {
        return Err(invalid("name must not be empty".to_string()));
    }

    if metadata.version.trim().is_empty() {
        return Err(invalid("version must not be empty".to_string()));
    }

    if metadata.extension.is_empty()
        || metadata
            .extension
            .contains(|c: char| c == '/' || c == '\\' || c == '.')
    {
        return Err(invalid(
            "extension must be non-empty and must not contain '.' or path separators".to_string(),
        ));
    }

    let source_url = Url::parse(&metadata.source_url).map_err(|e| {
        invalid(format!(
            "source-url is not a valid URL: {} ({e})",
            metadata.source_url
        ))
    })?;

    let checksum: ChecksumSpec = metadata
        .checksum
        .parse()
        .map_err(|e| invalid(format!("{e}")))?;

    let formula = Formula {
        name: metadata.name,
        version: metadata.version,
        archive_url_template: metadata.archive_url_template,
        source_url,
        checksum,
        repository_path: metadata.repository_path,
        upstream: metadata.upstream,
        fork: metadata.fork,
        extension: metadata.extension,
        pr_title_format: metadata.pr_title_format,
        commit_title_format: metadata.commit_title_format,
        pr_body: metadata.pr_body,
    };

    formula.repo().map_err(|e| invalid(e.to_string()))?;
    validate_branch_name(&formula.branch_name()).map_err(|e| invalid(e.to_string()))?;

    Ok(formula)
}
