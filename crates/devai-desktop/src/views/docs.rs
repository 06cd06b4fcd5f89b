//! # Documentation View
//!
//! Generated documentation per source file.

use devai_core::results::{DocStatus, Documentation, FunctionDoc};
use devai_core::Feature;
use dioxus::prelude::*;

use crate::components::{FeatureHeader, FilterInput, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// AI documentation generator page.
#[component]
pub fn DocsView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis::<Documentation>(|| None);
    let current = view.read();

    rsx! {
        div {
            class: "feature-view docs-view",

            FeatureHeader { feature: Feature::Documentation }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Generate docs",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| submit(view, state.client()),
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(docs) = current.result() {
                FilterInput {
                    value: current.filter().to_string(),
                    placeholder: "Filter by path or language",
                    on_input: move |value: String| view.write().set_filter(value),
                }

                {doc_list(docs, current.filter())}
            }
        }
    }
}

fn doc_list(docs: &Documentation, filter: &str) -> Element {
    let files = docs.filtered(filter);

    rsx! {
        div {
            class: "stat-row mb-md",
            div { class: "stat mono", "{docs.repo}" }
            div { class: "stat", "{docs.docs.len()} files" }
            if docs.failed_count() > 0 {
                div { class: "stat text-error", "{docs.failed_count()} failed" }
            }
        }

        if files.is_empty() {
            p { class: "text-secondary", "No files match the filter." }
        }

        for doc in files {
            details {
                key: "{doc.path}",
                class: "file-card glass-panel-static mb-md",

                summary {
                    span { class: "mono", "{doc.path}" }
                    span { class: "badge", "{doc.language}" }
                    span { class: "meta", "{doc.lines_count} lines" }
                    if doc.status == DocStatus::Failed {
                        span { class: "badge badge-error", "failed" }
                    }
                }

                if !doc.functions.is_empty() {
                    ul {
                        class: "function-list",
                        for function in &doc.functions {
                            li {
                                span { class: "mono", "{signature(function)}" }
                                " "
                                span { "{function.description}" }
                                if !function.example.is_empty() {
                                    pre { class: "mono", "{function.example}" }
                                }
                            }
                        }
                    }
                }

                pre { class: "prose", "{doc.documentation}" }
            }
        }
    }
}

fn signature(function: &FunctionDoc) -> String {
    format!("{}({})", function.name, function.params.join(", "))
}
