//! Checksum specification parsing.

use super::FormulaError;
use std::fmt;
use std::str::FromStr;

/// A checksum given as `<algorithm>:<hexdigest>`, e.g. `sha256:cafef00d`.
///
/// The algorithm doubles as the field label inside the formula file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumSpec {
    algorithm: String,
    digest: String,
}

impl ChecksumSpec {
    /// Algorithm name, also the field label in the formula file.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Hex digest.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl FromStr for ChecksumSpec {
    type Err = FormulaError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| FormulaError::InvalidChecksum {
            spec: spec.to_string(),
            reason,
        };

        let (algorithm, digest) = spec
            .split_once(':')
            .ok_or_else(|| invalid("missing ':' separator"))?;

        if algorithm.is_empty()
            || !algorithm
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(invalid("algorithm must be a non-empty identifier"));
        }

        if digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("digest must be non-empty hexadecimal"));
        }

        Ok(Self {
            algorithm: algorithm.to_string(),
            digest: digest.to_string(),
        })
    }
}

impl fmt::Display for ChecksumSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_algorithm_and_digest() {
        let spec: ChecksumSpec = "sha256:cafef00d".parse().unwrap();
        assert_eq!(spec.algorithm(), "sha256");
        assert_eq!(spec.digest(), "cafef00d");
        assert_eq!(spec.to_string(), "sha256:cafef00d");
    }

    #[test]
    fn rejects_missing_separator() {
        let result = "sha256cafef00d".parse::<ChecksumSpec>();
        assert!(matches!(result, Err(FormulaError::InvalidChecksum { .. })));
    }

    #[test]
    fn rejects_non_hex_digest() {
        assert!("sha256:not-hex".parse::<ChecksumSpec>().is_err());
        assert!("sha256:".parse::<ChecksumSpec>().is_err());
    }

    #[test]
    fn rejects_bad_algorithm() {
        assert!(":cafef00d".parse::<ChecksumSpec>().is_err());
        assert!("sha 256:cafef00d".parse::<ChecksumSpec>().is_err());
    }
}
