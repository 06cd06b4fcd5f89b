//! # DevAI Core
//!
//! Core types, API client, and view state for the DevAI Pro dashboard.
//!
//! Every dashboard page follows the same contract: collect a repository
//! identifier, submit it to the analysis backend, and render either the
//! decoded result or an error. This crate holds that contract so the
//! desktop application and the CLI share one implementation.
//!
//! ## Modules
//!
//! - [`api`] - HTTP client for the analysis backend
//! - [`config`] - Persisted client configuration
//! - [`feature`] - The feature catalogue and execution ids
//! - [`repository`] - `owner/name` repository identifiers
//! - [`results`] - Per-feature response schemas
//! - [`samples`] - Sample datasets shown before the first request
//! - [`shell`] - Navigation shell model
//! - [`view`] - Per-view request state machine
//!
//! ## Example
//!
//! ```rust,no_run
//! use devai_core::api::DevaiClient;
//! use devai_core::results::CommitHistory;
//! use devai_core::view::{run_submission, SubmitPolicy, ViewState};
//!
//! # async fn demo() {
//! let client = DevaiClient::new("http://127.0.0.1:5000");
//! let mut view = ViewState::<CommitHistory>::new(SubmitPolicy::RejectIfBusy);
//!
//! view.set_input("octocat/Hello-World");
//! if let Ok(submission) = view.submit() {
//!     let token = submission.token();
//!     let outcome = run_submission(&client, &submission).await;
//!     view.complete(token, outcome);
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod feature;
pub mod repository;
pub mod results;
pub mod samples;
pub mod shell;
pub mod view;

pub use error::{Error, Result};
pub use feature::Feature;
pub use repository::RepositoryRef;
