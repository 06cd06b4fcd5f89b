//! # Navigation Shell
//!
//! The persistent menu around every view: a fixed list of destinations,
//! the active one, and a cosmetic collapsed/expanded toggle.

use crate::Feature;

/// A destination in the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The feature dashboard.
    Home,
    /// A feature view.
    Feature(Feature),
}

impl Destination {
    /// Every destination in menu order.
    pub const ALL: [Destination; 9] = [
        Destination::Home,
        Destination::Feature(Feature::CodeReview),
        Destination::Feature(Feature::CommitIntent),
        Destination::Feature(Feature::Insights),
        Destination::Feature(Feature::Documentation),
        Destination::Feature(Feature::SecurityScan),
        Destination::Feature(Feature::CommitHistory),
        Destination::Feature(Feature::Onboarding),
        Destination::Feature(Feature::Activity),
    ];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Feature(feature) => feature.name(),
        }
    }

    /// Route path of the destination.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::Feature(Feature::CodeReview) => "/ai-code-review",
            Self::Feature(Feature::CommitIntent) => "/commit-validator",
            Self::Feature(Feature::Insights) => "/insights-dashboard",
            Self::Feature(Feature::Documentation) => "/auto-docstrings",
            Self::Feature(Feature::SecurityScan) => "/vulnerability-scan",
            Self::Feature(Feature::CommitHistory) => "/commit-history",
            Self::Feature(Feature::Onboarding) => "/codebase-explorer",
            Self::Feature(Feature::Activity) => "/activity",
        }
    }

    /// Resolves a route path, ignoring a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|d| d.path() == path)
    }

    /// Short monogram shown when the menu is collapsed.
    #[must_use]
    pub fn initials(self) -> String {
        self.label()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(char::is_ascii_uppercase)
            .take(2)
            .collect()
    }
}

/// State of the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavShell {
    active: Destination,
    collapsed: bool,
}

impl Default for NavShell {
    fn default() -> Self {
        Self {
            active: Destination::Home,
            collapsed: false,
        }
    }
}

impl NavShell {
    /// The active destination.
    #[must_use]
    pub fn active(&self) -> Destination {
        self.active
    }

    /// True if `dest` is the active destination.
    #[must_use]
    pub fn is_active(&self, dest: Destination) -> bool {
        self.active == dest
    }

    /// Makes `dest` active.
    pub fn navigate(&mut self, dest: Destination) {
        if self.active != dest {
            tracing::debug!(from = self.active.path(), to = dest.path(), "Navigating");
            self.active = dest;
        }
    }

    /// Makes the destination at `path` active. Unknown paths are ignored.
    ///
    /// Returns whether the path resolved.
    pub fn navigate_path(&mut self, path: &str) -> bool {
        match Destination::from_path(path) {
            Some(dest) => {
                self.navigate(dest);
                true
            }
            None => false,
        }
    }

    /// True when the menu is collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flips between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn every_feature_has_a_destination() {
        for feature in Feature::ALL {
            assert!(Destination::ALL.contains(&Destination::Feature(feature)));
        }
    }

    #[test]
    fn paths_are_unique_and_resolve() {
        let paths: HashSet<&str> = Destination::ALL.iter().map(|d| d.path()).collect();
        assert_eq!(paths.len(), Destination::ALL.len());

        for dest in Destination::ALL {
            assert_eq!(Destination::from_path(dest.path()), Some(dest));
        }
        assert_eq!(
            Destination::from_path("/commit-history/"),
            Some(Destination::Feature(Feature::CommitHistory))
        );
        assert_eq!(Destination::from_path("/"), None);
        assert_eq!(Destination::from_path("/nope"), None);
    }

    #[test]
    fn toggle_flips_collapsed() {
        let mut shell = NavShell::default();
        assert!(!shell.is_collapsed());
        shell.toggle();
        assert!(shell.is_collapsed());
        shell.toggle();
        assert!(!shell.is_collapsed());
    }

    #[test]
    fn navigate_path_updates_active() {
        let mut shell = NavShell::default();
        assert!(shell.is_active(Destination::Home));

        assert!(shell.navigate_path("/insights-dashboard"));
        assert_eq!(shell.active(), Destination::Feature(Feature::Insights));

        assert!(!shell.navigate_path("/missing"));
        assert_eq!(shell.active(), Destination::Feature(Feature::Insights));
    }

    #[test]
    fn toggle_does_not_change_active() {
        let mut shell = NavShell::default();
        shell.navigate(Destination::Feature(Feature::Activity));
        shell.toggle();
        assert_eq!(shell.active(), Destination::Feature(Feature::Activity));
    }

    #[test]
    fn initials_from_label() {
        assert_eq!(Destination::Home.initials(), "H");
        assert_eq!(
            Destination::Feature(Feature::CodeReview).initials(),
            "SC"
        );
    }
}
