//! # API Types
//!
//! Types for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::{Feature, RepositoryRef};

/// Request body for `POST /api/execute/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteRequest {
    /// The repository to analyze.
    pub repo: RepositoryRef,
}

/// Response envelope shared by every execute call.
///
/// Success responses carry `result`; failures carry `error` with a
/// non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A feature as advertised by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureInfo {
    /// Execution id.
    pub id: u8,
    /// Display name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
}

impl FeatureInfo {
    /// Returns the known feature for this id, if any.
    #[must_use]
    pub fn feature(&self) -> Option<Feature> {
        Feature::from_id(self.id)
    }
}

impl From<Feature> for FeatureInfo {
    fn from(feature: Feature) -> Self {
        Self {
            id: feature.id(),
            name: feature.name().to_string(),
            description: feature.description().to_string(),
        }
    }
}

/// Response of `GET /api/features`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesResponse {
    /// Advertised features.
    pub features: Vec<FeatureInfo>,
}
