//! # DevAI Pro Desktop
//!
//! Native dashboard for the DevAI Pro analysis backend.
//!
//! ## Architecture
//!
//! Every page is a thin Dioxus wrapper around a [`devai_core::view::ViewState`]
//! held in a signal. All validation, request bookkeeping and decoding lives in
//! `devai-core`; this crate only renders state and forwards events.
//!
//! ## Modules
//!
//! - [`components`] - Navigation shell and shared form widgets
//! - [`hooks`] - Signal-backed view state and request spawning
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - One page per feature, plus home and settings

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod components;
mod hooks;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Starting DevAI Pro");

    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("DevAI Pro")
            .with_inner_size(LogicalSize::new(1200.0, 800.0))
            .with_min_inner_size(LogicalSize::new(900.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
    Ok(())
}

/// Root application component.
#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
