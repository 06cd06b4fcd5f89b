//! # Code Review View

use devai_core::results::CodeReview;
use devai_core::Feature;
use dioxus::prelude::*;

use crate::components::{FeatureHeader, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// Review suggestions for the most recent open pull request.
#[component]
pub fn CodeReviewView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis::<CodeReview>(|| None);
    let current = view.read();

    rsx! {
        div {
            class: "feature-view code-review-view",

            FeatureHeader { feature: Feature::CodeReview }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Review latest PR",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| submit(view, state.client()),
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(review) = current.result() {
                div {
                    class: "stat-row mb-md",
                    if let Some(pr) = review.pr_number {
                        div { class: "stat", "PR #{pr}" }
                    }
                    div { class: "stat", "{review.files.len()} files" }
                    div { class: "stat", "{review.total_changes()} changed lines" }
                }

                if review.files.is_empty() {
                    p { class: "text-secondary", "No reviewable files in this pull request." }
                }

                for file in &review.files {
                    div {
                        key: "{file.file}",
                        class: "file-card glass-panel-static mb-md",

                        div {
                            class: "file-card-header",
                            span { class: "mono", "{file.file}" }
                            span { class: "meta", "{file.changes_count} changes" }
                        }
                        pre { class: "prose", "{file.suggestions}" }
                    }
                }
            }
        }
    }
}
