//! Visual git history results.

use serde::{Deserialize, Serialize};

use super::{matches_filter, AnalysisResult};
use crate::Feature;

/// Line and file counts for a single commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStats {
    /// Lines added.
    #[serde(default)]
    pub additions: u64,
    /// Lines deleted.
    #[serde(default)]
    pub deletions: u64,
    /// Files touched.
    #[serde(default)]
    pub files: u64,
}

/// One entry on the commit timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA (full or abbreviated).
    pub sha: String,
    /// First line of the commit message.
    pub message: String,
    /// Author name.
    pub author: String,
    /// Author date as reported by the backend.
    pub date: String,
    /// Change statistics.
    #[serde(default)]
    pub changes: ChangeStats,
}

impl Commit {
    /// Returns the SHA abbreviated to seven characters.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}

/// Result of the visual git history feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitHistory {
    /// Commits, newest first.
    pub commits: Vec<Commit>,
    /// AI summary of the history.
    pub summary: String,
}

impl CommitHistory {
    /// Commits whose author or message matches `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &str) -> Vec<&Commit> {
        self.commits
            .iter()
            .filter(|c| matches_filter(filter, &[&c.author, &c.message]))
            .collect()
    }

    /// Total additions and deletions across all commits, saturating at
    /// `u64::MAX`.
    #[must_use]
    pub fn totals(&self) -> ChangeStats {
        self.commits
            .iter()
            .fold(ChangeStats::default(), |acc, c| ChangeStats {
                additions: acc.additions.saturating_add(c.changes.additions),
                deletions: acc.deletions.saturating_add(c.changes.deletions),
                files: acc.files.saturating_add(c.changes.files),
            })
    }
}

impl AnalysisResult for CommitHistory {
    const FEATURE: Feature = Feature::CommitHistory;

    fn validate(&self) -> Result<(), String> {
        match self.commits.iter().position(|c| c.sha.trim().is_empty()) {
            Some(index) => Err(format!("commit {index} has an empty sha")),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn history() -> CommitHistory {
        serde_json::from_value(json!({
            "commits": [
                {
                    "sha": "7fd1a60b01f91b314f59955a4e4d4e80d8edf11d",
                    "message": "Merge pull request #6 from Spaceghost/patch-1",
                    "author": "The Octocat",
                    "date": "2012-03-06T23:06:50Z",
                    "changes": { "additions": 3, "deletions": 1, "files": 1 }
                },
                {
                    "sha": "762941318ee16e59dabbacb1b4049eec22f0d303",
                    "message": "New line at end of file.",
                    "author": "Johnneylee Jack Rollins",
                    "date": "2011-09-14T04:42:41Z"
                }
            ],
            "summary": "- Initial README"
        }))
        .unwrap()
    }

    #[test]
    fn missing_change_stats_default_to_zero() {
        let h = history();
        assert_eq!(h.commits[1].changes, ChangeStats::default());
        assert_eq!(
            h.totals(),
            ChangeStats {
                additions: 3,
                deletions: 1,
                files: 1
            }
        );
    }

    #[test]
    fn short_sha_truncates() {
        let h = history();
        assert_eq!(h.commits[0].short_sha(), "7fd1a60");
    }

    #[test]
    fn filter_matches_author_or_message() {
        let h = history();
        assert_eq!(h.filtered("octocat").len(), 1);
        assert_eq!(h.filtered("end of file").len(), 1);
        assert_eq!(h.filtered("").len(), 2);
        assert!(h.filtered("nobody").is_empty());
    }

    #[test]
    fn missing_summary_is_rejected() {
        let result: Result<CommitHistory, _> = serde_json::from_value(json!({ "commits": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut h = history();
        h.commits[0].changes.additions = u64::MAX;
        h.commits[1].changes.additions = 1;
        h.commits[1].changes.files = u64::MAX;

        let totals = h.totals();
        assert_eq!(totals.additions, u64::MAX);
        assert_eq!(totals.deletions, 1);
        assert_eq!(totals.files, u64::MAX);
    }

    #[test]
    fn validate_rejects_empty_sha() {
        let mut h = history();
        h.commits[1].sha = String::new();
        assert_eq!(h.validate(), Err("commit 1 has an empty sha".to_string()));
    }
}
