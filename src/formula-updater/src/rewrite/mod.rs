//! Formula file rewriting.
//!
//! Locates the `url` line and the checksum line of a formula, swaps in the
//! new values and writes the file back under an exclusive lock. Every other
//! byte of the file is left untouched.

mod error;

pub use error::RewriteError;

use crate::formula::ChecksumSpec;
use fs2::FileExt;
use regex::{Captures, Regex};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Outcome of rewriting a formula file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRewrite {
    /// Both the url and the checksum line were rewritten.
    Updated,

    /// At least one declaration was missing or already current; the file was
    /// left as is.
    NothingToCommit,
}

/// Result of rewriting formula text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenContent {
    /// Text after substitution.
    pub content: String,

    /// Whether the url line was replaced with a different value.
    pub url_replaced: bool,

    /// Whether the checksum line was replaced with a different value.
    pub checksum_replaced: bool,
}

impl RewrittenContent {
    /// True when both declarations changed.
    ///
    /// A new url without a new checksum (or the reverse) would leave the
    /// formula inconsistent, so partial rewrites are never written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.url_replaced && self.checksum_replaced
    }
}

/// Rewrites the url and checksum declarations in `content`.
///
/// Each pattern is applied at most once across the whole text and the result
/// reports which of the two actually changed.
///
/// # Errors
///
/// Returns [`RewriteError::Pattern`] if a pattern fails to compile.
pub fn rewrite_content(
    content: &str,
    archive_url: &str,
    checksum: &ChecksumSpec,
) -> Result<RewrittenContent, RewriteError> {
    let url_pattern = Regex::new(r#"(?m)^(?P<indent>[ \t]*)url[ \t]+"[^"\n]*""#)?;
    let checksum_pattern = Regex::new(&format!(
        r#"(?m)^(?P<indent>[ \t]*){}[ \t]+"[^"\n]*""#,
        regex::escape(checksum.algorithm())
    ))?;

    let (content, url_replaced) = replace_first(content, &url_pattern, |caps| {
        format!("{}url \"{archive_url}\"", &caps["indent"])
    });
    let (content, checksum_replaced) = replace_first(&content, &checksum_pattern, |caps| {
        format!(
            "{}{} \"{}\"",
            &caps["indent"],
            checksum.algorithm(),
            checksum.digest()
        )
    });

    Ok(RewrittenContent {
        content,
        url_replaced,
        checksum_replaced,
    })
}

/// Rewrites the formula file at `path` in place.
///
/// Returns [`FileRewrite::NothingToCommit`] without touching the file unless
/// both the url and the checksum line changed.
///
/// # Errors
///
/// Returns [`RewriteError`] if the file cannot be read, locked or written.
pub fn rewrite_formula_file(
    path: &Path,
    archive_url: &str,
    checksum: &ChecksumSpec,
) -> Result<FileRewrite, RewriteError> {
    let io_error = |source| RewriteError::IoError {
        path: path.display().to_string(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(io_error)?;
    let rewritten = rewrite_content(&content, archive_url, checksum)?;

    debug!(
        path = %path.display(),
        url_replaced = rewritten.url_replaced,
        checksum_replaced = rewritten.checksum_replaced,
        "Rewrote formula content"
    );

    if !rewritten.is_complete() {
        return Ok(FileRewrite::NothingToCommit);
    }

    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(io_error)?;
    write_locked(file, rewritten.content.as_bytes()).map_err(io_error)?;

    Ok(FileRewrite::Updated)
}

/// Replaces the first match of `pattern`, reporting whether the text changed.
fn replace_first(
    content: &str,
    pattern: &Regex,
    render: impl Fn(&Captures<'_>) -> String,
) -> (String, bool) {
    let Some(caps) = pattern.captures(content) else {
        return (content.to_string(), false);
    };
    let Some(matched) = caps.get(0) else {
        return (content.to_string(), false);
    };

    let replacement = render(&caps);
    if replacement == matched.as_str() {
        return (content.to_string(), false);
    }

    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..matched.start()]);
    out.push_str(&replacement);
    out.push_str(&content[matched.end()..]);
    (out, true)
}

/// Truncates and writes `file` while holding an exclusive lock on it.
fn write_locked(mut file: File, bytes: &[u8]) -> std::io::Result<()> {
    FileExt::lock_exclusive(&file)?;
    let result = (|| {
        file.set_len(0)?;
        file.write_all(bytes)?;
        file.sync_all()
    })();
    FileExt::unlock(&file)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FORMULA: &str = r#"class Foo < Formula
  desc "Does foo things"
  homepage "https://example.com/foo"
  url "https://old/url"
  sha256 "deadbeef"
  license "MIT"

  def install
    bin.install "foo"
  end
end
"#;

    fn checksum() -> ChecksumSpec {
        "sha256:cafef00d".parse().unwrap()
    }

    #[test]
    fn rewrites_url_and_checksum() {
        let rewritten =
            rewrite_content(FORMULA, "https://example.com/foo/2.0.0.tar.gz", &checksum()).unwrap();

        assert!(rewritten.is_complete());
        assert_eq!(
            rewritten.content,
            FORMULA
                .replace("https://old/url", "https://example.com/foo/2.0.0.tar.gz")
                .replace("deadbeef", "cafef00d")
        );
    }

    #[test]
    fn replaces_only_first_occurrence() {
        let formula = "  url \"a\"\n  sha256 \"00\"\n  resource \"x\" do\n    url \"b\"\n    sha256 \"11\"\n  end\n";
        let rewritten = rewrite_content(formula, "new", &checksum()).unwrap();

        assert!(rewritten.is_complete());
        assert_eq!(
            rewritten.content,
            "  url \"new\"\n  sha256 \"cafef00d\"\n  resource \"x\" do\n    url \"b\"\n    sha256 \"11\"\n  end\n"
        );
    }

    #[test]
    fn preserves_trailing_arguments() {
        let formula = "  url \"https://old\", using: :nounzip\n  sha256 \"00\"\n";
        let rewritten = rewrite_content(formula, "https://new", &checksum()).unwrap();

        assert!(rewritten
            .content
            .contains("  url \"https://new\", using: :nounzip\n"));
    }

    #[test]
    fn uses_algorithm_as_field_label() {
        let formula = "  url \"a\"\n  sha256 \"00\"\n  sha512 \"00\"\n";
        let spec: ChecksumSpec = "sha512:abcd".parse().unwrap();
        let rewritten = rewrite_content(formula, "b", &spec).unwrap();

        assert!(rewritten.is_complete());
        assert_eq!(
            rewritten.content,
            "  url \"b\"\n  sha256 \"00\"\n  sha512 \"abcd\"\n"
        );
    }

    #[test]
    fn reports_missing_checksum_line() {
        let formula = "  url \"https://old/url\"\n  sha1 \"deadbeef\"\n";
        let rewritten = rewrite_content(formula, "https://new", &checksum()).unwrap();

        assert!(rewritten.url_replaced);
        assert!(!rewritten.checksum_replaced);
        assert!(!rewritten.is_complete());
    }

    #[test]
    fn reports_nothing_replaced_when_up_to_date() {
        let formula = "  url \"https://new\"\n  sha256 \"cafef00d\"\n";
        let rewritten = rewrite_content(formula, "https://new", &checksum()).unwrap();

        assert!(!rewritten.url_replaced);
        assert!(!rewritten.checksum_replaced);
        assert_eq!(rewritten.content, formula);
    }

    #[test]
    fn reports_nothing_replaced_without_matches() {
        let rewritten =
            rewrite_content("no declarations here\n", "https://new", &checksum()).unwrap();
        assert!(!rewritten.url_replaced);
        assert!(!rewritten.checksum_replaced);
    }

    #[test]
    fn writes_updated_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("foo.rb");
        fs::write(&path, FORMULA).unwrap();

        let outcome = rewrite_formula_file(&path, "https://new/url", &checksum()).unwrap();

        assert_eq!(outcome, FileRewrite::Updated);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("  url \"https://new/url\"\n"));
        assert!(written.contains("  sha256 \"cafef00d\"\n"));
        assert!(written.ends_with("end\n"));
    }

    #[test]
    fn leaves_file_untouched_when_nothing_changes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("foo.rb");
        fs::write(&path, "nothing to see\n").unwrap();

        let outcome = rewrite_formula_file(&path, "https://new/url", &checksum()).unwrap();

        assert_eq!(outcome, FileRewrite::NothingToCommit);
        assert_eq!(fs::read_to_string(&path).unwrap(), "nothing to see\n");
    }

    #[test]
    fn leaves_file_untouched_when_only_url_matches() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("foo.rb");
        let original = "  url \"https://old/url\"\n  sha1 \"deadbeef\"\n";
        fs::write(&path, original).unwrap();

        let outcome = rewrite_formula_file(&path, "https://new/url", &checksum()).unwrap();

        assert_eq!(outcome, FileRewrite::NothingToCommit);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = rewrite_formula_file(&temp.path().join("missing.rb"), "x", &checksum());

        assert!(matches!(result, Err(RewriteError::IoError { .. })));
    }
}
