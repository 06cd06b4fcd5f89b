//! # Insights View
//!
//! Productivity metrics for the last thirty days of pull requests.

use devai_core::results::Insights;
use devai_core::{samples, Feature};
use dioxus::prelude::*;

use crate::components::{FeatureHeader, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// Developer productivity dashboard.
#[component]
pub fn InsightsView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis(|| state.show_sample_data().then(samples::insights));
    let current = view.read();

    rsx! {
        div {
            class: "feature-view insights-view",

            FeatureHeader { feature: Feature::Insights }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Load insights",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| submit(view, state.client()),
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(insights) = current.result() {
                {dashboard(insights)}
            }
        }
    }
}

fn dashboard(insights: &Insights) -> Element {
    let turnaround_days = format!("{:.1}", insights.avg_turnaround_days());
    let avg_changes = format!("{:.0}", insights.avg_changes_per_pr());

    rsx! {
        div {
            class: "metric-grid mb-lg",

            Metric { label: "Avg PR turnaround", value: "{turnaround_days} days" }
            Metric { label: "Merged PRs", value: "{insights.merged_prs}" }
            Metric { label: "Net lines changed", value: "{insights.net_lines()}" }
            Metric { label: "Contributors", value: "{insights.contributors}" }
            Metric { label: "Avg changes per PR", value: "{avg_changes}" }
        }

        div {
            class: "stat-row mb-md",
            div { class: "stat text-success", "+{insights.total_additions} added" }
            div { class: "stat text-error", "-{insights.total_deletions} deleted" }
        }

        if !insights.recent_activity.is_empty() {
            h3 { class: "mb-md", "Recent activity" }
            table {
                class: "activity-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Type" }
                        th { "Author" }
                        th { "Title" }
                    }
                }
                tbody {
                    for record in &insights.recent_activity {
                        tr {
                            td { class: "mono", "{record.date}" }
                            td { span { class: "badge", "{record.kind}" } }
                            td { "{record.author}" }
                            td { "{record.title}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Metric(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "metric-card",
            div { class: "metric-value", "{value}" }
            div { class: "metric-label", "{label}" }
        }
    }
}
