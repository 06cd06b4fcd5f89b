//! # UI Components
//!
//! Reusable UI components for the DevAI Pro desktop application.
//!
//! - [`Layout`] - Navigation shell wrapping every routed page
//! - [`Sidebar`] - Collapsible navigation menu
//! - [`Header`] - Active page title and backend status
//! - [`RepoForm`], [`FilterInput`], [`StatusBanner`], [`FeatureHeader`] -
//!   building blocks shared by the feature pages

mod form;
mod header;
mod layout;
mod sidebar;

pub use form::{FeatureHeader, FilterInput, RepoForm, StatusBanner};
pub use header::Header;
pub use layout::Layout;
pub use sidebar::Sidebar;
