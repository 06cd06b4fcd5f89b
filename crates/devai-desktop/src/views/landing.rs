//! # Landing View

use dioxus::prelude::*;

use crate::router::Route;

/// Entry page, rendered without the navigation shell.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            class: "landing-view",

            h1 { "DevAI Pro" }
            p {
                class: "text-secondary mb-lg",
                "AI-assisted code review, commit analysis, documentation and onboarding for your GitHub repositories."
            }

            Link {
                to: Route::Home {},
                class: "btn-primary",
                "Open dashboard"
            }
        }
    }
}
