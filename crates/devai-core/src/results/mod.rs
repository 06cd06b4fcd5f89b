//! # Result Schemas
//!
//! One decoder per backend endpoint. Each schema names its required
//! fields explicitly, so a payload that is missing them is rejected as a
//! whole instead of rendering partially. Documented defaults are limited
//! to numeric metrics (missing → `0`) and lists (missing → empty).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::Feature;

mod activity;
mod code_review;
mod commit_intent;
mod documentation;
mod history;
mod insights;
mod onboarding;
mod security;

pub use activity::{ActivityFeed, Notification};
pub use code_review::{CodeReview, FileReview};
pub use commit_intent::{CommitAnalysis, Rating};
pub use documentation::{DocStatus, Documentation, FileDoc, FunctionDoc};
pub use history::{ChangeStats, Commit, CommitHistory};
pub use insights::{ActivityRecord, Insights};
pub use onboarding::{FileAnalysis, Onboarding, TreeNode};
pub use security::{FileScan, SecurityScan};

/// A decoded `result` payload for one feature.
pub trait AnalysisResult:
    DeserializeOwned + Serialize + Clone + Debug + PartialEq + Send + Sync + 'static
{
    /// The feature whose endpoint produces this result.
    const FEATURE: Feature;

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Case-insensitive substring match used by the client-side filters.
///
/// An empty (or whitespace-only) needle matches everything.
pub(crate) fn matches_filter(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches_filter("", &["anything"]));
        assert!(matches_filter("   ", &[]));
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert!(matches_filter("ALICE", &["bob", "Alice Johnson"]));
        assert!(!matches_filter("carol", &["bob", "Alice Johnson"]));
    }
}
