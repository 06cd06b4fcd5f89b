//! Commit intent analysis results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AnalysisResult;
use crate::Feature;

/// Overall verdict on a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Message accurately describes a focused change.
    Good,
    /// Message is acceptable but could be improved.
    Fair,
    /// Message does not describe the change.
    Poor,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        })
    }
}

/// Result of the commit intent analyzer for the most recent commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAnalysis {
    /// Analyzed commit SHA.
    pub sha: String,
    /// The commit message as written.
    pub message: String,
    /// Verdict.
    pub rating: Rating,
    /// Explanation and suggested improvements.
    pub analysis: String,
}

impl AnalysisResult for CommitAnalysis {
    const FEATURE: Feature = Feature::CommitIntent;

    fn validate(&self) -> Result<(), String> {
        if self.sha.trim().is_empty() {
            return Err("sha must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_rating() {
        let analysis: CommitAnalysis = serde_json::from_value(json!({
            "sha": "abc1234",
            "message": "fix stuff",
            "rating": "poor",
            "analysis": "Say what was fixed."
        }))
        .unwrap();
        assert_eq!(analysis.rating, Rating::Poor);
        assert_eq!(analysis.rating.to_string(), "Poor");
    }

    #[test]
    fn unknown_rating_is_rejected() {
        let result: Result<CommitAnalysis, _> = serde_json::from_value(json!({
            "sha": "abc1234",
            "message": "fix stuff",
            "rating": "excellent",
            "analysis": ""
        }));
        assert!(result.is_err());
    }
}
