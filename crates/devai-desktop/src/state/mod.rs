//! # State Management
//!
//! Global state shared through Dioxus context.

mod app_state;

pub use app_state::AppState;
