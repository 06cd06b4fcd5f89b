//! # Commit History View
//!
//! Commit timeline with an AI summary of the changes.

use devai_core::results::CommitHistory;
use devai_core::{samples, Feature};
use dioxus::prelude::*;

use crate::components::{FeatureHeader, FilterInput, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// Visual git history page.
#[component]
pub fn HistoryView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis(|| state.show_sample_data().then(samples::commit_history));
    let current = view.read();

    rsx! {
        div {
            class: "feature-view history-view",

            FeatureHeader { feature: Feature::CommitHistory }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Load history",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| submit(view, state.client()),
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(history) = current.result() {
                FilterInput {
                    value: current.filter().to_string(),
                    placeholder: "Filter by author or message",
                    on_input: move |value: String| view.write().set_filter(value),
                }

                {timeline(history, current.filter())}
            }
        }
    }
}

fn timeline(history: &CommitHistory, filter: &str) -> Element {
    let totals = history.totals();
    let commits = history.filtered(filter);

    rsx! {
        div {
            class: "stat-row mb-md",
            div { class: "stat", strong { "{history.commits.len()}" } " commits" }
            div { class: "stat text-success", "+{totals.additions}" }
            div { class: "stat text-error", "-{totals.deletions}" }
            div { class: "stat", "{totals.files} files touched" }
        }

        if commits.is_empty() {
            p { class: "text-secondary", "No commits match the filter." }
        }

        ol {
            class: "timeline",

            for commit in commits {
                li {
                    key: "{commit.sha}",
                    class: "timeline-item",

                    div {
                        class: "timeline-meta",
                        span { class: "mono", "{commit.short_sha()}" }
                        span { "{commit.author}" }
                        span { class: "text-secondary", "{commit.date}" }
                    }
                    p { "{commit.message}" }
                    div {
                        class: "meta",
                        "+{commit.changes.additions} -{commit.changes.deletions} in {commit.changes.files} files"
                    }
                }
            }
        }

        if !history.summary.is_empty() {
            div {
                class: "summary glass-panel-static",
                h3 { class: "mb-md", "Summary" }
                pre { class: "prose", "{history.summary}" }
            }
        }
    }
}
