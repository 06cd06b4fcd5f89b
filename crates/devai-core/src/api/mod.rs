//! # API Client
//!
//! HTTP client for communicating with the DevAI analysis backend.
//!
//! This module provides the [`DevaiClient`] for executing features
//! against a running backend instance.

mod client;
mod error;
mod types;

pub use client::DevaiClient;
pub use error::{ApiError, ApiResult, FALLBACK_ERROR_MESSAGE};
pub use types::{ExecuteRequest, FeatureInfo, FeaturesResponse};
