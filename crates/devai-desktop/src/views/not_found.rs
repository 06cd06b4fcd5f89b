//! # Not Found View

use dioxus::prelude::*;

use crate::router::Route;

/// Fallback for paths with no page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found-view",

            h2 { class: "mb-md", "Page not found" }
            p { class: "text-secondary mono", "/{path}" }

            Link {
                to: Route::Home {},
                class: "back-link",
                "← Back to Home"
            }
        }
    }
}
