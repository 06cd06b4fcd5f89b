//! # Routing
//!
//! Route paths mirror [`Destination::path`]; the two are kept in sync by
//! the tests below.

use devai_core::shell::Destination;
use devai_core::Feature;
use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{
    ActivityView, CodeReviewView, CommitIntentView, DocsView, Home, HistoryView, InsightsView,
    Landing, NotFound, OnboardingView, SecurityView, Settings,
};

/// Application routes.
///
/// Everything except the landing page is wrapped in the [`Layout`] shell.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    /// Landing page, rendered without the shell.
    #[route("/")]
    Landing {},

    #[layout(Layout)]
        /// Feature catalogue and backend status.
        #[route("/home")]
        Home {},

        #[route("/ai-code-review")]
        CodeReviewView {},

        #[route("/commit-validator")]
        CommitIntentView {},

        #[route("/insights-dashboard")]
        InsightsView {},

        #[route("/auto-docstrings")]
        DocsView {},

        #[route("/vulnerability-scan")]
        SecurityView {},

        #[route("/commit-history")]
        HistoryView {},

        #[route("/codebase-explorer")]
        OnboardingView {},

        #[route("/activity")]
        ActivityView {},

        /// Backend URL and request behaviour.
        #[route("/settings")]
        Settings {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(dest: Destination) -> Self {
        match dest {
            Destination::Home => Route::Home {},
            Destination::Feature(feature) => match feature {
                Feature::CodeReview => Route::CodeReviewView {},
                Feature::Insights => Route::InsightsView {},
                Feature::CommitIntent => Route::CommitIntentView {},
                Feature::Documentation => Route::DocsView {},
                Feature::SecurityScan => Route::SecurityView {},
                Feature::CommitHistory => Route::HistoryView {},
                Feature::Onboarding => Route::OnboardingView {},
                Feature::Activity => Route::ActivityView {},
            },
        }
    }
}
