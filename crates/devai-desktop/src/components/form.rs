//! # Feature Page Widgets
//!
//! Inputs and status blocks shared by every feature page.

use devai_core::view::ViewError;
use devai_core::Feature;
use dioxus::prelude::*;

/// Page title and description for a feature.
#[component]
pub fn FeatureHeader(feature: Feature) -> Element {
    rsx! {
        div {
            class: "feature-header mb-lg",
            h2 { "{feature.name()}" }
            p { class: "text-secondary", "{feature.description()}" }
        }
    }
}

/// Repository input with a submit button.
///
/// The button is disabled while `loading`; pressing enter submits too.
#[component]
pub fn RepoForm(
    value: String,
    loading: bool,
    #[props(default = "Run analysis".to_string())] action: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "repo-form glass-panel-static",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                on_submit.call(());
            },

            div {
                class: "form-field",

                label { r#for: "repo", "Repository" }
                input {
                    id: "repo",
                    r#type: "text",
                    value: "{value}",
                    placeholder: "owner/repo",
                    autofocus: true,
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }

            button {
                class: "btn-primary",
                r#type: "submit",
                disabled: loading,
                if loading { "Analyzing..." } else { "{action}" }
            }
        }
    }
}

/// Client-side filter over an already-loaded result.
#[component]
pub fn FilterInput(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "filter-input",
            input {
                r#type: "search",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// Loading indicator and error message for a view.
#[component]
pub fn StatusBanner(loading: bool, error: Option<ViewError>) -> Element {
    rsx! {
        if loading {
            div {
                class: "loading",
                span { class: "spinner" }
                "Waiting for the backend..."
            }
        }

        if let Some(err) = error {
            div {
                class: match err {
                    ViewError::Validation(_) => "alert alert-warning",
                    ViewError::Request(_) => "alert alert-error",
                },
                "{err.message()}"
            }
        }
    }
}
