//! # Application State
//!
//! Global state management using Dioxus signals and context.

use devai_core::api::DevaiClient;
use devai_core::config::Config;
use devai_core::shell::NavShell;
use dioxus::prelude::*;

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///     let url = state.config.read().api_url.clone();
///
///     rsx! {
///         p { "Backend: {url}" }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Effective configuration (file plus environment override).
    pub config: Signal<Config>,

    /// Whether the last health check reached the backend.
    pub connected: Signal<bool>,

    /// Active destination and sidebar collapse state.
    pub shell: Signal<NavShell>,
}

impl AppState {
    /// Creates the application state, loading persisted config from disk.
    #[must_use]
    pub fn new() -> Self {
        let config = Config::load();
        tracing::info!(api_url = %config.api_url, policy = %config.submit_policy, "Loaded configuration");

        Self {
            config: Signal::new(config),
            connected: Signal::new(false),
            shell: Signal::new(NavShell::default()),
        }
    }

    /// Creates a [`DevaiClient`] for the configured backend.
    #[must_use]
    pub fn client(&self) -> DevaiClient {
        DevaiClient::new(self.config.read().api_url.clone())
    }

    /// Whether the insights and history pages start with sample data.
    #[must_use]
    pub fn show_sample_data(&self) -> bool {
        self.config.read().show_sample_data
    }

    /// Updates the backend URL, resetting connection state if it changed.
    pub fn set_api_url(&mut self, url: &str) -> devai_core::Result<()> {
        let mut config = self.config.read().clone();
        config.set_api_url(url)?;

        if config.api_url != self.config.read().api_url {
            self.connected.set(false);
        }
        self.config.set(config);
        Ok(())
    }

    /// Saves the current configuration to disk.
    pub fn save_config(&self) {
        if let Err(e) = self.config.read().save() {
            tracing::warn!(error = %e, "Failed to save config");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
