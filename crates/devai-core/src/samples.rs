//! Sample datasets.
//!
//! Shown by the insights and history views before the first request when
//! sample data is enabled. Callers pass them as the view's initial result.

use crate::results::{ActivityRecord, ChangeStats, Commit, CommitHistory, Insights};

/// Sample productivity metrics.
#[must_use]
pub fn insights() -> Insights {
    Insights {
        avg_turnaround_hours: 18.5,
        merged_prs: 42,
        total_additions: 12_480,
        total_deletions: 5_230,
        contributors: 7,
        recent_activity: vec![
            ActivityRecord {
                date: "2024-06-03".to_string(),
                author: "alex".to_string(),
                kind: "merged".to_string(),
                title: "Add streaming responses to review endpoint".to_string(),
            },
            ActivityRecord {
                date: "2024-06-02".to_string(),
                author: "sam".to_string(),
                kind: "opened".to_string(),
                title: "Cache repository trees between runs".to_string(),
            },
            ActivityRecord {
                date: "2024-06-01".to_string(),
                author: "jordan".to_string(),
                kind: "commit".to_string(),
                title: "Fix pagination off-by-one in PR fetch".to_string(),
            },
        ],
    }
}

/// Sample commit timeline.
#[must_use]
pub fn commit_history() -> CommitHistory {
    let commit = |sha: &str, message: &str, author: &str, date: &str, stats: (u64, u64, u64)| {
        Commit {
            sha: sha.to_string(),
            message: message.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            changes: ChangeStats {
                additions: stats.0,
                deletions: stats.1,
                files: stats.2,
            },
        }
    };

    CommitHistory {
        commits: vec![
            commit(
                "a3f9c21e8b7d4f60c1e2d3b4a5968778695a4b3c",
                "Add onboarding assistant endpoint",
                "alex",
                "2024-06-03T14:22:00Z",
                (214, 12, 4),
            ),
            commit(
                "9b1e7d45c3a2f8061e4d2c9b7a6f5e4d3c2b1a09",
                "Refactor GitHub client pagination",
                "sam",
                "2024-06-02T09:10:00Z",
                (88, 131, 3),
            ),
            commit(
                "47c0d2e1f9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4",
                "Initial commit",
                "jordan",
                "2024-05-30T18:45:00Z",
                (1_020, 0, 17),
            ),
        ],
        summary: "- Added the onboarding assistant\n- Reworked pagination in the GitHub client\n- Project scaffolding".to_string(),
    }
}
