//! Repository identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A repository identifier of the form `owner/name`.
///
/// This is the sole required input across every dashboard feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    /// Parses an `owner/name` identifier.
    ///
    /// Surrounding whitespace is trimmed. The identifier must contain
    /// exactly one `/` separating two non-empty segments, and neither
    /// segment may contain whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the identifier is malformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devai_core::RepositoryRef;
    ///
    /// let repo = RepositoryRef::parse(" octocat/Hello-World ").unwrap();
    /// assert_eq!(repo.owner(), "octocat");
    /// assert_eq!(repo.to_string(), "octocat/Hello-World");
    ///
    /// assert!(RepositoryRef::parse("not-a-repo").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let Some((owner, name)) = trimmed.split_once('/') else {
            return Err(Error::invalid_input("repo", "expected 'owner/name'"));
        };
        if name.contains('/') {
            return Err(Error::invalid_input("repo", "too many '/' separators"));
        }
        if owner.is_empty() || name.is_empty() {
            return Err(Error::invalid_input("repo", "owner and name must be non-empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(Error::invalid_input("repo", "whitespace is not allowed"));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the repository's full path (owner/name).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RepositoryRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<RepositoryRef> for String {
    fn from(repo: RepositoryRef) -> Self {
        repo.full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_valid_identifier() {
        let repo = RepositoryRef::parse("octocat/Hello-World").unwrap();
        assert_eq!(repo.owner(), "octocat");
        assert_eq!(repo.name(), "Hello-World");
        assert_eq!(repo.full_name(), "octocat/Hello-World");
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let repo = RepositoryRef::parse("  rust-lang/rust\n").unwrap();
        assert_eq!(repo.to_string(), "rust-lang/rust");
    }

    #[test]
    fn parse_rejects_malformed_identifiers() {
        for input in [
            "",
            "   ",
            "not-a-repo",
            "/name",
            "owner/",
            "/",
            "a/b/c",
            "own er/name",
        ] {
            assert!(
                RepositoryRef::parse(input).is_err(),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let repo = RepositoryRef::parse("octocat/Hello-World").unwrap();
        let json = serde_json::to_string(&repo).unwrap();
        assert_eq!(json, "\"octocat/Hello-World\"");
    }

    #[test]
    fn deserialize_rejects_invalid_string() {
        let result: std::result::Result<RepositoryRef, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }
}
