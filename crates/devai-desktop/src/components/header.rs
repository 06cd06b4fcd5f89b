//! # Header Component
//!
//! Active page title and backend status.

use dioxus::prelude::*;

use crate::state::AppState;

/// Application header component.
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();
    let connected = *state.connected.read();
    let title = state.shell.read().active().label();
    let api_url = state.config.read().api_url.clone();

    let status_class = if connected {
        "status-indicator connected"
    } else {
        "status-indicator disconnected"
    };

    rsx! {
        header {
            class: "app-header",

            h1 { "{title}" }

            div { class: "header-right",
                div {
                    class: "connection-status",
                    title: "{api_url}",

                    span {
                        class: "{status_class}",
                    }

                    span {
                        if connected { "Connected" } else { "Disconnected" }
                    }
                }
            }
        }
    }
}
