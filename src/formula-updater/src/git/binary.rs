//! Git executable resolution.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Preferred location of the git executable.
pub const PREFERRED_GIT_PATH: &str = "/usr/local/bin/git";

/// Standard system location used when the preferred one is absent.
pub const SYSTEM_GIT_PATH: &str = "/usr/bin/git";

/// Resolves the git executable, preferring [`PREFERRED_GIT_PATH`].
///
/// Probes the filesystem, so call it once at startup and inject the result.
#[must_use]
pub fn resolve_git_binary() -> PathBuf {
    select_binary(Path::new(PREFERRED_GIT_PATH), Path::new(SYSTEM_GIT_PATH))
}

/// Picks `preferred` if it exists, `fallback` otherwise.
pub(crate) fn select_binary(preferred: &Path, fallback: &Path) -> PathBuf {
    let chosen = if preferred.is_file() {
        preferred
    } else {
        fallback
    };
    debug!(binary = %chosen.display(), "Resolved git binary");
    chosen.to_path_buf()
}
