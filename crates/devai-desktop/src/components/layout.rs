//! # Layout Component
//!
//! Navigation shell providing consistent structure.

use dioxus::prelude::*;

use super::{Header, Sidebar};
use crate::router::Route;
use crate::state::AppState;

/// Navigation shell.
///
/// Keeps the shell's active destination in step with the current route and
/// renders the routed page inside the content area.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Sidebar |         Header                    |
/// |         |-----------------------------------|
/// |  Nav    |                                   |
/// |  Items  |         Active View               |
/// |         |         (Outlet)                  |
/// |         |                                   |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let mut state = use_context::<AppState>();
    let path = use_route::<Route>().to_string();

    use_effect(use_reactive((&path,), move |(path,)| {
        state.shell.write().navigate_path(&path);
    }));

    // Health check, rerun when the backend URL changes
    use_effect(move || {
        let client = state.client();
        spawn(async move {
            match client.health().await {
                Ok(true) => {
                    state.connected.set(true);
                    tracing::info!("Connected to backend");
                }
                Ok(false) => {
                    state.connected.set(false);
                    tracing::warn!("Backend is not serving the feature catalogue");
                }
                Err(e) => {
                    state.connected.set(false);
                    tracing::warn!(error = %e, "Failed to reach backend");
                }
            }
        });
    });

    let shell_class = if state.shell.read().is_collapsed() {
        "app-layout collapsed"
    } else {
        "app-layout"
    };

    rsx! {
        div {
            class: "{shell_class}",

            Sidebar {}

            div {
                class: "main-panel",

                Header {}

                main {
                    class: "content",

                    Outlet::<Route> {}
                }
            }
        }
    }
}
