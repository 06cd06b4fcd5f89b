//! Activity notifier results.

use serde::{Deserialize, Serialize};

use super::{matches_filter, AnalysisResult};
use crate::Feature;

/// A single collaborator action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Repository the event belongs to.
    pub repository: String,
    /// Event name, e.g. `Push`, `Pull Request`.
    pub event: String,
    /// Login of the collaborator.
    pub actor: String,
    /// Event timestamp.
    pub time: String,
    /// Operation description, e.g. `git push`.
    #[serde(default)]
    pub operation: String,
    /// Summary of what changed.
    #[serde(default)]
    pub updates: String,
}

/// Result of the activity notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFeed {
    /// Notifications, oldest first.
    pub notifications: Vec<Notification>,
}

impl ActivityFeed {
    /// Notifications whose actor or event matches `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &str) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| matches_filter(filter, &[&n.actor, &n.event]))
            .collect()
    }
}

impl AnalysisResult for ActivityFeed {
    const FEATURE: Feature = Feature::Activity;
}
