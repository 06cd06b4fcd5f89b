//! # Security Scan View

use devai_core::results::SecurityScan;
use devai_core::Feature;
use dioxus::prelude::*;

use crate::components::{FeatureHeader, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// Vulnerability findings for the files of the most recent pull request.
#[component]
pub fn SecurityView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis::<SecurityScan>(|| None);
    let current = view.read();

    rsx! {
        div {
            class: "feature-view security-view",

            FeatureHeader { feature: Feature::SecurityScan }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Scan latest PR",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| submit(view, state.client()),
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(scan) = current.result() {
                div {
                    class: "stat-row mb-md",
                    if let Some(pr) = scan.pr_number {
                        div { class: "stat", "PR #{pr}" }
                    }
                    div { class: "stat", "{scan.files.len()} files scanned" }
                    div { class: "stat text-error", "{scan.flagged().len()} flagged" }
                }

                for file in &scan.files {
                    div {
                        key: "{file.file}",
                        class: if file.is_clean() { "file-card clean mb-md" } else { "file-card flagged mb-md" },

                        div {
                            class: "file-card-header",
                            span { class: "mono", "{file.file}" }
                            span { class: "meta", "{file.lines_scanned} lines" }
                        }
                        pre { class: "prose", "{file.issues}" }
                    }
                }
            }
        }
    }
}
