//! Generated documentation results.

use serde::{Deserialize, Serialize};

use super::{matches_filter, AnalysisResult};
use crate::Feature;

/// Outcome of generating documentation for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStatus {
    /// Documentation was generated.
    Completed,
    /// Fetching or generating failed; `documentation` holds the reason.
    Failed,
}

/// A function, class, or component extracted from generated docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDoc {
    /// Symbol name.
    pub name: String,
    /// Parameter names.
    #[serde(default)]
    pub params: Vec<String>,
    /// What it does.
    #[serde(default)]
    pub description: String,
    /// Usage example, if any.
    #[serde(default)]
    pub example: String,
}

/// Documentation for one repository file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDoc {
    /// File name without directories.
    pub filename: String,
    /// Path from the repository root.
    pub path: String,
    /// Inferred language.
    pub language: String,
    /// Extracted symbols.
    #[serde(default)]
    pub functions: Vec<FunctionDoc>,
    /// Generated documentation text.
    pub documentation: String,
    /// Generation status.
    pub status: DocStatus,
    /// Number of source lines documented.
    #[serde(default)]
    pub lines_count: u64,
}

/// Result of the documentation generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Repository the documentation was generated for.
    pub repo: String,
    /// Per-file documentation.
    pub docs: Vec<FileDoc>,
}

impl Documentation {
    /// Files whose path or language matches `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &str) -> Vec<&FileDoc> {
        self.docs
            .iter()
            .filter(|d| matches_filter(filter, &[&d.path, &d.language]))
            .collect()
    }

    /// Number of files whose generation failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.docs
            .iter()
            .filter(|d| d.status == DocStatus::Failed)
            .count()
    }
}

impl AnalysisResult for Documentation {
    const FEATURE: Feature = Feature::Documentation;
}
