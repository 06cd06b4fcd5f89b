//! Smart code review results.

use serde::{Deserialize, Serialize};

use super::AnalysisResult;
use crate::Feature;

/// Review of one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReview {
    /// Path of the reviewed file.
    pub file: String,
    /// AI review text.
    pub suggestions: String,
    /// Number of added/removed lines analyzed.
    #[serde(default)]
    pub changes_count: u64,
}

/// Result of the smart code reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeReview {
    /// Pull request that was reviewed.
    #[serde(default)]
    pub pr_number: Option<u64>,
    /// Per-file reviews.
    pub files: Vec<FileReview>,
}

impl CodeReview {
    /// Total lines analyzed across all files, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_changes(&self) -> u64 {
        self.files
            .iter()
            .fold(0_u64, |acc, f| acc.saturating_add(f.changes_count))
    }
}

impl AnalysisResult for CodeReview {
    const FEATURE: Feature = Feature::CodeReview;
}
