//! # Activity View

use devai_core::results::ActivityFeed;
use devai_core::Feature;
use dioxus::prelude::*;

use crate::components::{FeatureHeader, FilterInput, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// Recent repository activity feed.
#[component]
pub fn ActivityView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis::<ActivityFeed>(|| None);
    let current = view.read();

    rsx! {
        div {
            class: "feature-view activity-view",

            FeatureHeader { feature: Feature::Activity }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Check activity",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| submit(view, state.client()),
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(feed) = current.result() {
                FilterInput {
                    value: current.filter().to_string(),
                    placeholder: "Filter by actor or event",
                    on_input: move |value: String| view.write().set_filter(value),
                }

                if feed.notifications.is_empty() {
                    p { class: "text-secondary", "No recent activity." }
                }

                ul {
                    class: "activity-feed",
                    for (index, note) in feed.filtered(current.filter()).into_iter().enumerate() {
                        li {
                            key: "{index}",
                            class: "activity-item",

                            div {
                                class: "timeline-meta",
                                span { class: "badge", "{note.event}" }
                                span { "{note.actor}" }
                                span { class: "mono", "{note.repository}" }
                                span { class: "text-secondary", "{note.time}" }
                            }
                            if !note.updates.is_empty() {
                                p { "{note.updates}" }
                            }
                            div { class: "meta", "{note.operation}" }
                        }
                    }
                }
            }
        }
    }
}
