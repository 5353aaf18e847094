//! Formula definition loading.
//!
//! This module handles parsing formula `.toml` files and loading them
//! from the filesystem.

mod error;
mod loader;
mod metadata;

pub use error::ConfigError;
pub use loader::load_formula;
pub use metadata::{
    default_commit_title_format, default_pr_body, default_pr_title_format, FormulaMetadata,
};

use crate::formula::Formula;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Scans a directory and loads every formula definition in it.
///
/// Each `*.toml` file directly inside `formulas_path` holds one formula.
/// Files are loaded in name order.
///
/// # Returns
///
/// The successfully loaded formulas. Invalid definitions are logged as
/// warnings but don't cause the entire operation to fail.
///
/// # Errors
///
/// Returns an error if the directory doesn't exist or can't be read.
pub fn scan_formulas(formulas_path: &Path) -> Result<Vec<Formula>, ConfigError> {
    info!(path = %formulas_path.display(), "Scanning formulas directory");

    if !formulas_path.is_dir() {
        return Err(ConfigError::MissingFile {
            path: formulas_path.display().to_string(),
        });
    }

    let io_error = |e| ConfigError::IoError {
        path: formulas_path.display().to_string(),
        source: e,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(formulas_path).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut formulas = Vec::with_capacity(paths.len());
    for path in paths {
        match load_formula(&path) {
            Ok(formula) => {
                debug!(name = %formula.name, version = %formula.version, "Loaded formula");
                formulas.push(formula);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load formula");
            }
        }
    }

    info!(count = formulas.len(), "Loaded formulas");
    Ok(formulas)
}
