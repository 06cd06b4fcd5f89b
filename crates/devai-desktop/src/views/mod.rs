//! # Views
//!
//! Page-level view components for the DevAI Pro desktop application.
//!
//! - [`Landing`] - Entry page outside the navigation shell
//! - [`Home`] - Feature catalogue and backend status
//! - One page per feature, each wrapping a `ViewState`
//! - [`Settings`] - Backend URL and request behaviour
//! - [`NotFound`] - Unknown paths

mod activity;
mod code_review;
mod commit_intent;
mod docs;
mod history;
mod home;
mod insights;
mod landing;
mod not_found;
mod onboarding;
mod security;
mod settings;

pub use activity::ActivityView;
pub use code_review::CodeReviewView;
pub use commit_intent::CommitIntentView;
pub use docs::DocsView;
pub use history::HistoryView;
pub use home::Home;
pub use insights::InsightsView;
pub use landing::Landing;
pub use not_found::NotFound;
pub use onboarding::OnboardingView;
pub use security::SecurityView;
pub use settings::Settings;
