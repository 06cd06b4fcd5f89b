//! # API Client
//!
//! HTTP client for communicating with the DevAI analysis backend.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::error::{ApiError, ApiResult};
use super::types::{Envelope, ExecuteRequest, FeatureInfo, FeaturesResponse};
use crate::results::AnalysisResult;
use crate::RepositoryRef;

/// Client-level timeout, matching the backend's own upstream timeouts.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the DevAI backend API.
///
/// The client is cheaply cloneable and can be shared across views.
///
/// # Examples
///
/// ```rust,ignore
/// use devai_core::api::DevaiClient;
/// use devai_core::results::CommitHistory;
///
/// let client = DevaiClient::new("http://127.0.0.1:5000");
/// let repo = "octocat/Hello-World".parse()?;
/// let history: CommitHistory = client.execute(&repo).await?;
/// println!("{} commits", history.commits.len());
/// ```
#[derive(Clone, Debug)]
pub struct DevaiClient {
    base_url: String,
    http: Client,
}

impl DevaiClient {
    /// Creates a new client for the backend at `base_url`.
    ///
    /// A trailing slash on the URL is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { base_url, http }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the request fails.
    pub async fn health(&self) -> ApiResult<bool> {
        let res = self
            .http
            .get(format!("{}/api/features", self.base_url))
            .send()
            .await?;
        Ok(res.status().is_success())
    }

    /// Retrieves the features advertised by the backend.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Backend returned a non-2xx status
    /// * [`ApiError::InvalidResponse`] - Response could not be parsed
    pub async fn list_features(&self) -> ApiResult<Vec<FeatureInfo>> {
        let res = self
            .http
            .get(format!("{}/api/features", self.base_url))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(ApiError::Server {
                status: res.status().as_u16(),
                message: None,
            });
        }

        res.json::<FeaturesResponse>()
            .await
            .map(|body| body.features)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Executes the feature bound to `R` against `repo`.
    ///
    /// Sends `POST /api/execute/{id}` with `{ "repo": "owner/name" }` and
    /// decodes the `result` field into `R`.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Backend returned a non-2xx status
    /// * [`ApiError::InvalidResponse`] - Body did not match `R`'s schema
    pub async fn execute<R: AnalysisResult>(&self, repo: &RepositoryRef) -> ApiResult<R> {
        let feature = R::FEATURE;
        let url = format!("{}/api/execute/{}", self.base_url, feature.id());
        tracing::debug!(feature = feature.id(), %repo, "Executing feature");

        let body = ExecuteRequest { repo: repo.clone() };
        let res = self.http.post(&url).json(&body).send().await?;

        let status = res.status();
        let bytes = res.bytes().await?;
        let outcome = decode_response::<R>(status, &bytes);

        if let Err(ref e) = outcome {
            tracing::warn!(feature = feature.id(), %repo, error = %e, "Feature execution failed");
        }
        outcome
    }
}

/// Decodes an execute response body according to `R`'s schema.
pub(crate) fn decode_response<R: AnalysisResult>(
    status: StatusCode,
    body: &[u8],
) -> ApiResult<R> {
    if !status.is_success() {
        let message = serde_json::from_slice::<Envelope>(body)
            .ok()
            .and_then(|envelope| envelope.error);
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| ApiError::InvalidResponse(format!("body is not valid JSON: {e}")))?;

    let Some(value) = envelope.result else {
        return Err(ApiError::InvalidResponse(
            "missing 'result' field".to_string(),
        ));
    };

    let result: R =
        serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
    result.validate().map_err(ApiError::InvalidResponse)?;

    Ok(result)
}
