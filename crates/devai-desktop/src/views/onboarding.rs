//! # Onboarding View
//!
//! Repository tree explorer with per-file analysis.

use devai_core::results::{Onboarding, TreeNode};
use devai_core::Feature;
use dioxus::prelude::*;

use crate::components::{FeatureHeader, FilterInput, RepoForm, StatusBanner};
use crate::hooks::{submit, use_analysis};
use crate::state::AppState;

/// Smart onboarding assistant page.
#[component]
pub fn OnboardingView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_analysis::<Onboarding>(|| None);
    let mut selected = use_signal(|| Option::<String>::None);
    let current = view.read();

    rsx! {
        div {
            class: "feature-view onboarding-view",

            FeatureHeader { feature: Feature::Onboarding }

            RepoForm {
                value: current.input().to_string(),
                loading: current.is_loading(),
                action: "Explore codebase",
                on_input: move |value: String| view.write().set_input(value),
                on_submit: move |_| {
                    selected.set(None);
                    submit(view, state.client());
                },
            }

            StatusBanner { loading: current.is_loading(), error: current.error().cloned() }

            if let Some(onboarding) = current.result() {
                div {
                    class: "stat-row mb-md",
                    div { class: "stat", "{onboarding.all_files().len()} files" }
                    for (language, count) in onboarding.language_breakdown() {
                        div { class: "stat", span { class: "badge", "{language}" } " {count}" }
                    }
                }

                FilterInput {
                    value: current.filter().to_string(),
                    placeholder: "Filter by path",
                    on_input: move |value: String| view.write().set_filter(value),
                }

                div {
                    class: "explorer",

                    div {
                        class: "explorer-tree",
                        if current.filter().trim().is_empty() {
                            {tree(&onboarding.files, selected)}
                        } else {
                            {file_list(onboarding.filtered(current.filter()), selected)}
                        }
                    }

                    div {
                        class: "explorer-detail",
                        {analysis_panel(onboarding, selected.read().as_deref())}
                    }
                }
            }
        }
    }
}

fn tree(nodes: &[TreeNode], mut selected: Signal<Option<String>>) -> Element {
    rsx! {
        ul {
            class: "tree",
            for node in nodes {
                match node {
                    TreeNode::Folder { path, children } => rsx! {
                        li {
                            key: "{path}",
                            details {
                                summary { class: "tree-folder", "{node.name()}/" }
                                {tree(children, selected)}
                            }
                        }
                    },
                    TreeNode::File { path, language, .. } => {
                        let path = path.clone();
                        rsx! {
                            li {
                                key: "{path}",
                                class: "tree-file",
                                onclick: move |_| selected.set(Some(path.clone())),
                                "{node.name()}"
                                span { class: "meta", " {language}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn file_list(files: Vec<&TreeNode>, mut selected: Signal<Option<String>>) -> Element {
    rsx! {
        if files.is_empty() {
            p { class: "text-secondary", "No files match the filter." }
        }
        ul {
            class: "tree",
            for node in files {
                {
                    let path = node.path().to_string();
                    rsx! {
                        li {
                            key: "{path}",
                            class: "tree-file mono",
                            onclick: move |_| selected.set(Some(path.clone())),
                            "{node.path()}"
                        }
                    }
                }
            }
        }
    }
}

fn analysis_panel(onboarding: &Onboarding, selected: Option<&str>) -> Element {
    let Some(path) = selected else {
        return rsx! {
            p { class: "text-secondary", "Select a file to see its analysis." }
        };
    };

    match onboarding.analyses.get(path) {
        Some(analysis) => rsx! {
            h3 { class: "mono mb-md", "{path}" }
            span { class: "badge", "complexity: {analysis.complexity}" }
            p { "{analysis.description}" }

            if !analysis.functions.is_empty() {
                h4 { "Main functions" }
                ul {
                    for function in &analysis.functions {
                        li { class: "mono", "{function}" }
                    }
                }
            }

            if !analysis.suggestions.is_empty() {
                h4 { "Suggestions" }
                ul {
                    for suggestion in &analysis.suggestions {
                        li { "{suggestion}" }
                    }
                }
            }
        },
        None => rsx! {
            h3 { class: "mono mb-md", "{path}" }
            p { class: "text-secondary", "No analysis available for this file." }
        },
    }
}
