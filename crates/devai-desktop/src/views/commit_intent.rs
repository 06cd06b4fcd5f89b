//! # Commit Intent View

use devai_core::results::{CommitAnalysis, Rating};
use devai_core::Feature;
use dioxus::prelude::*;

use crate::components::{FeatureHeader, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// Checks whether the latest commit message matches its diff.
#[component]
pub fn CommitIntentView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis::<CommitAnalysis>(|| None);
    let current = view.read();

    rsx! {
        div {
            class: "feature-view commit-intent-view",

            FeatureHeader { feature: Feature::CommitIntent }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Analyze latest commit",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| submit(view, state.client()),
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(commit) = current.result() {
                div {
                    class: "glass-panel-static",

                    div {
                        class: "file-card-header",
                        span { class: "mono", "{commit.sha}" }
                        span {
                            class: match commit.rating {
                                Rating::Good => "badge badge-success",
                                Rating::Fair => "badge badge-warning",
                                Rating::Poor => "badge badge-error",
                            },
                            "{commit.rating}"
                        }
                    }

                    blockquote { "{commit.message}" }
                    pre { class: "prose", "{commit.analysis}" }
                }
            }
        }
    }
}
