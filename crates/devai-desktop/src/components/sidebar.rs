//! # Sidebar Component
//!
//! Collapsible navigation menu.

use devai_core::shell::Destination;
use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Navigation sidebar.
///
/// Lists every shell destination in menu order and highlights the active
/// one. When collapsed only initials are shown.
#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let shell = *state.shell.read();

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                if shell.is_collapsed() { "D" } else { "DevAI Pro" }
            }

            button {
                class: "btn-sm btn-ghost sidebar-toggle",
                title: if shell.is_collapsed() { "Expand menu" } else { "Collapse menu" },
                onclick: move |_| state.shell.write().toggle(),
                if shell.is_collapsed() { "»" } else { "«" }
            }

            div {
                class: "nav-links",

                for dest in Destination::ALL {
                    Link {
                        key: "{dest.path()}",
                        to: Route::from(dest),
                        class: if shell.is_active(dest) { "nav-link active" } else { "nav-link" },
                        if shell.is_collapsed() {
                            span { class: "nav-initials", "{dest.initials()}" }
                        } else {
                            span { class: "nav-label", "{dest.label()}" }
                        }
                    }
                }
            }

            div {
                class: "nav-footer",

                Link {
                    to: Route::Settings {},
                    class: "nav-link",
                    if shell.is_collapsed() { "S" } else { "Settings" }
                }
            }
        }
    }
}
