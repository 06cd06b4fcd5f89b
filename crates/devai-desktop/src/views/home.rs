//! # Home View
//!
//! Dashboard listing the feature catalogue.

use devai_core::api::FeatureInfo;
use devai_core::shell::Destination;
use devai_core::Feature;
use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Home dashboard view.
///
/// Fetches the catalogue from the backend once and falls back to the
/// built-in list when the backend is unreachable.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let client = state.client();

    let features = use_resource(move || {
        let client = client.clone();
        async move {
            match client.list_features().await {
                Ok(features) if !features.is_empty() => (features, true),
                Ok(_) => (builtin(), true),
                Err(e) => {
                    tracing::warn!(error = %e, "Falling back to built-in catalogue");
                    (builtin(), false)
                }
            }
        }
    });

    rsx! {
        div {
            class: "home-view",

            div {
                class: "home-header",
                h2 { "Features" }
            }

            match &*features.read() {
                Some((items, reachable)) => rsx! {
                    if !reachable {
                        div {
                            class: "alert alert-warning mb-md",
                            "Backend unreachable at {state.config.read().api_url}. Showing the built-in feature list."
                        }
                    }

                    div {
                        class: "feature-grid",

                        for info in items.iter().filter(|info| info.feature().is_some()) {
                            FeatureCard { key: "{info.id}", info: info.clone() }
                        }
                    }
                },
                None => rsx! {
                    div {
                        class: "loading",
                        "Loading features..."
                    }
                },
            }
        }
    }
}

#[component]
fn FeatureCard(info: FeatureInfo) -> Element {
    let Some(feature) = info.feature() else {
        return rsx! {};
    };

    rsx! {
        Link {
            to: Route::from(Destination::Feature(feature)),

            div {
                class: "feature-card",

                h3 { "{info.name}" }
                p { "{info.description}" }
            }
        }
    }
}

fn builtin() -> Vec<FeatureInfo> {
    Feature::ALL.into_iter().map(FeatureInfo::from).collect()
}
