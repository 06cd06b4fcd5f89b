//! # Settings View
//!
//! Backend URL and request behaviour.

use devai_core::view::SubmitPolicy;
use dioxus::prelude::*;

use crate::state::AppState;

/// Settings view component.
///
/// Edits the backend URL, the submit policy and whether sample data is
/// shown, and tests the connection.
#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<AppState>();
    let initial = state.config.read().clone();

    let mut url_input = use_signal(|| initial.api_url.clone());
    let mut policy = use_signal(|| initial.submit_policy);
    let mut show_samples = use_signal(|| initial.show_sample_data);
    let mut save_result = use_signal(|| Option::<Result<(), String>>::None);
    let mut testing = use_signal(|| false);
    let mut test_result = use_signal(|| Option::<Result<(), String>>::None);

    let on_save = move |_| {
        let url = url_input.read().clone();
        if let Err(e) = state.set_api_url(&url) {
            save_result.set(Some(Err(e.to_string())));
            return;
        }
        {
            let mut config = state.config.write();
            config.submit_policy = *policy.read();
            config.show_sample_data = *show_samples.read();
        }
        state.save_config();
        url_input.set(state.config.read().api_url.clone());
        save_result.set(Some(Ok(())));
        test_result.set(None);
    };

    let on_test = move |_| {
        let client = state.client();
        testing.set(true);
        test_result.set(None);

        spawn(async move {
            match client.health().await {
                Ok(true) => {
                    state.connected.set(true);
                    test_result.set(Some(Ok(())));
                }
                Ok(false) => {
                    state.connected.set(false);
                    test_result.set(Some(Err("Backend did not return the feature list".to_string())));
                }
                Err(e) => {
                    state.connected.set(false);
                    test_result.set(Some(Err(e.to_string())));
                }
            }
            testing.set(false);
        });
    };

    rsx! {
        div {
            class: "settings-view",

            h2 { class: "mb-lg", "Settings" }

            div {
                class: "settings-section",

                h3 { class: "mb-md", "Backend" }

                div {
                    class: "mb-md",

                    label { "API URL" }

                    input {
                        r#type: "text",
                        value: "{url_input}",
                        oninput: move |evt| url_input.set(evt.value()),
                    }
                }

                div {
                    class: "mb-md",

                    label { "While a request is running" }

                    select {
                        value: "{policy.read().as_str()}",
                        onchange: move |evt| match evt.value().parse::<SubmitPolicy>() {
                            Ok(value) => policy.set(value),
                            Err(e) => tracing::warn!(error = %e, "Ignoring submit policy"),
                        },
                        for choice in SubmitPolicy::ALL {
                            option {
                                value: choice.as_str(),
                                selected: choice == *policy.read(),
                                "{policy_label(choice)}"
                            }
                        }
                    }
                }

                div {
                    class: "mb-md",

                    label {
                        input {
                            r#type: "checkbox",
                            checked: *show_samples.read(),
                            onchange: move |evt| show_samples.set(evt.checked()),
                        }
                        " Show sample data on insights and history"
                    }
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        onclick: on_save,
                        "Save"
                    }

                    button {
                        class: "btn-success",
                        onclick: on_test,
                        disabled: *testing.read(),
                        if *testing.read() { "Testing..." } else { "Test Connection" }
                    }
                }

                if let Some(result) = save_result.read().as_ref() {
                    match result {
                        Ok(()) => rsx! {
                            div { class: "alert alert-success", "Settings saved." }
                        },
                        Err(msg) => rsx! {
                            div { class: "alert alert-error", "Could not save: {msg}" }
                        },
                    }
                }

                if let Some(result) = test_result.read().as_ref() {
                    match result {
                        Ok(()) => rsx! {
                            div {
                                class: "alert alert-success",
                                "Connection successful!"
                            }
                        },
                        Err(msg) => rsx! {
                            div {
                                class: "alert alert-error",
                                "Connection failed: {msg}"
                            }
                        },
                    }
                }
            }

            div {
                class: "current-state",

                h3 { class: "mb-md", "Current State" }

                div {
                    div {
                        strong { "API URL: " }
                        span { class: "mono", "{state.config.read().api_url}" }
                    }

                    div {
                        strong { "Submit policy: " }
                        span { class: "mono", "{state.config.read().submit_policy}" }
                    }

                    div {
                        strong { "Connected: " }
                        if *state.connected.read() {
                            span { class: "text-success", "Yes" }
                        } else {
                            span { class: "text-error", "No" }
                        }
                    }
                }
            }
        }
    }
}

fn policy_label(policy: SubmitPolicy) -> &'static str {
    match policy {
        SubmitPolicy::RejectIfBusy => "Ignore new submissions",
        SubmitPolicy::CancelAndReplace => "Cancel and start the new one",
    }
}
