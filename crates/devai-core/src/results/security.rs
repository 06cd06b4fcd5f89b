//! Security scan results.

use serde::{Deserialize, Serialize};

use super::AnalysisResult;
use crate::Feature;

/// Findings for one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileScan {
    /// Path of the scanned file.
    pub file: String,
    /// Added lines that were scanned.
    #[serde(default)]
    pub lines_scanned: u64,
    /// AI analysis of potential vulnerabilities.
    pub issues: String,
}

impl FileScan {
    /// True when the analysis reported nothing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues
            .to_lowercase()
            .contains("no obvious security issues")
    }
}

/// Result of the security scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScan {
    /// Pull request that was scanned.
    #[serde(default)]
    pub pr_number: Option<u64>,
    /// Per-file findings.
    pub files: Vec<FileScan>,
}

impl SecurityScan {
    /// Files with reported issues.
    #[must_use]
    pub fn flagged(&self) -> Vec<&FileScan> {
        self.files.iter().filter(|f| !f.is_clean()).collect()
    }
}

impl AnalysisResult for SecurityScan {
    const FEATURE: Feature = Feature::SecurityScan;
}
