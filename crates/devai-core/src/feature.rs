//! The feature catalogue.
//!
//! Each dashboard page is bound to one backend feature, identified by the
//! numeric execution id used in `POST /api/execute/{id}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A backend analysis feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Reviews the most recent pull request.
    CodeReview,
    /// Pull request throughput metrics.
    Insights,
    /// Evaluates the most recent commit message against its diff.
    CommitIntent,
    /// Generates documentation for repository files.
    Documentation,
    /// Scans the most recent pull request for vulnerabilities.
    SecurityScan,
    /// Commit timeline and AI summary of the history.
    CommitHistory,
    /// Repository structure and per-file analyses.
    Onboarding,
    /// Collaborator activity notifications.
    Activity,
}

impl Feature {
    /// All features in execution id order.
    pub const ALL: [Feature; 8] = [
        Feature::CodeReview,
        Feature::Insights,
        Feature::CommitIntent,
        Feature::Documentation,
        Feature::SecurityScan,
        Feature::CommitHistory,
        Feature::Onboarding,
        Feature::Activity,
    ];

    /// Returns the backend execution id.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::CodeReview => 1,
            Self::Insights => 2,
            Self::CommitIntent => 3,
            Self::Documentation => 4,
            Self::SecurityScan => 5,
            Self::CommitHistory => 6,
            Self::Onboarding => 7,
            Self::Activity => 8,
        }
    }

    /// Looks up a feature by execution id.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }

    /// Human-readable feature name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CodeReview => "Smart Code Reviewer",
            Self::Insights => "Productivity Insights",
            Self::CommitIntent => "Commit Intent Analyzer",
            Self::Documentation => "AI Documentation Generator",
            Self::SecurityScan => "AI Security Scanner",
            Self::CommitHistory => "Visual Git History",
            Self::Onboarding => "Smart Onboarding Assistant",
            Self::Activity => "Activity Notifier",
        }
    }

    /// One-line description shown on the home dashboard.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CodeReview => "AI review of the most recent pull request",
            Self::Insights => "Turnaround, throughput, and contributor metrics",
            Self::CommitIntent => "Checks the latest commit message against its diff",
            Self::Documentation => "Generates documentation for recent files",
            Self::SecurityScan => "Scans the most recent pull request for vulnerabilities",
            Self::CommitHistory => "Commit timeline with an AI summary of the history",
            Self::Onboarding => "Repository structure and file-by-file walkthrough",
            Self::Activity => "Recent pushes, pull requests, issues, and comments",
        }
    }

    /// Short identifier used on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CodeReview => "code-review",
            Self::Insights => "insights",
            Self::CommitIntent => "commit-intent",
            Self::Documentation => "docs",
            Self::SecurityScan => "security",
            Self::CommitHistory => "history",
            Self::Onboarding => "onboarding",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = Error;

    /// Accepts either a slug (`history`) or an execution id (`6`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id)
                .ok_or_else(|| Error::invalid_input("feature", format!("unknown id {id}")));
        }
        Self::ALL
            .into_iter()
            .find(|f| f.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_input("feature", format!("unknown feature '{s}'")))
    }
}
