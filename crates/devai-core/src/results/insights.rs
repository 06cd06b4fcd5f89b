//! Developer productivity insights.

use serde::{Deserialize, Serialize};

use super::AnalysisResult;
use crate::Feature;

/// One entry in the recent-activity list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Date of the activity.
    pub date: String,
    /// Who performed it.
    pub author: String,
    /// Activity kind, e.g. `merged`, `opened`, `commit`.
    pub kind: String,
    /// Pull request title or commit message.
    pub title: String,
}

/// Pull request throughput metrics for a repository.
///
/// Every numeric metric defaults to `0` when the backend omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Mean time from PR creation to merge, in hours.
    #[serde(default)]
    pub avg_turnaround_hours: f64,
    /// Number of merged pull requests.
    #[serde(default)]
    pub merged_prs: u64,
    /// Lines added across merged pull requests.
    #[serde(default)]
    pub total_additions: u64,
    /// Lines deleted across merged pull requests.
    #[serde(default)]
    pub total_deletions: u64,
    /// Distinct pull request authors.
    #[serde(default)]
    pub contributors: u64,
    /// Recent activity, newest first.
    #[serde(default)]
    pub recent_activity: Vec<ActivityRecord>,
}

impl Insights {
    /// Additions minus deletions, clamped to the `i64` range.
    #[must_use]
    pub fn net_lines(&self) -> i64 {
        let net = i128::from(self.total_additions) - i128::from(self.total_deletions);
        i64::try_from(net).unwrap_or(if net < 0 { i64::MIN } else { i64::MAX })
    }

    /// Average changed lines per merged pull request.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_changes_per_pr(&self) -> f64 {
        let changes = self.total_additions as f64 + self.total_deletions as f64;
        changes / self.merged_prs.max(1) as f64
    }

    /// Mean turnaround in days.
    #[must_use]
    pub fn avg_turnaround_days(&self) -> f64 {
        self.avg_turnaround_hours / 24.0
    }
}

impl AnalysisResult for Insights {
    const FEATURE: Feature = Feature::Insights;

    fn validate(&self) -> Result<(), String> {
        if self.avg_turnaround_hours.is_finite() && self.avg_turnaround_hours >= 0.0 {
            Ok(())
        } else {
            Err("avg_turnaround_hours must be a non-negative number".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_metrics_default_to_zero() {
        let insights: Insights = serde_json::from_value(json!({ "merged_prs": 4 })).unwrap();
        assert_eq!(insights.merged_prs, 4);
        assert_eq!(insights.total_additions, 0);
        assert_eq!(insights.contributors, 0);
        assert!(insights.recent_activity.is_empty());
    }

    #[test]
    fn derived_metrics() {
        let insights = Insights {
            avg_turnaround_hours: 36.0,
            merged_prs: 4,
            total_additions: 1_200,
            total_deletions: 400,
            contributors: 3,
            recent_activity: Vec::new(),
        };
        assert_eq!(insights.net_lines(), 800);
        assert!((insights.avg_changes_per_pr() - 400.0).abs() < f64::EPSILON);
        assert!((insights.avg_turnaround_days() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn avg_changes_with_no_merged_prs_does_not_divide_by_zero() {
        let insights = Insights {
            total_additions: 10,
            ..Insights::default()
        };
        assert!((insights.avg_changes_per_pr() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_totals_do_not_overflow() {
        let insights = Insights {
            total_additions: u64::MAX,
            total_deletions: 1,
            ..Insights::default()
        };
        assert_eq!(insights.net_lines(), i64::MAX);
        assert!(insights.avg_changes_per_pr() >= u64::MAX as f64);

        let shrinking = Insights {
            total_deletions: u64::MAX,
            ..Insights::default()
        };
        assert_eq!(shrinking.net_lines(), i64::MIN);
    }

    #[test]
    fn wrongly_typed_metric_is_rejected() {
        let result: Result<Insights, _> =
            serde_json::from_value(json!({ "merged_prs": "many" }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_negative_turnaround() {
        let insights = Insights {
            avg_turnaround_hours: -1.0,
            ..Insights::default()
        };
        assert!(insights.validate().is_err());
    }
}
