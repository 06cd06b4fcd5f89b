//! Onboarding assistant results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{matches_filter, AnalysisResult};
use crate::Feature;

fn unknown_language() -> String {
    "unknown".to_string()
}

/// A node in the repository tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    /// A regular file.
    File {
        /// Path from the repository root.
        path: String,
        /// Size in bytes.
        #[serde(default)]
        size: u64,
        /// Inferred language.
        #[serde(default = "unknown_language")]
        language: String,
    },
    /// A directory.
    Folder {
        /// Path from the repository root.
        path: String,
        /// Entries inside the directory.
        #[serde(default)]
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Path from the repository root.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::File { path, .. } | Self::Folder { path, .. } => path,
        }
    }

    /// Last path component.
    #[must_use]
    pub fn name(&self) -> &str {
        let path = self.path();
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Returns true if this is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a TreeNode>) {
        match self {
            Self::File { .. } => out.push(self),
            Self::Folder { children, .. } => {
                for child in children {
                    child.collect_files(out);
                }
            }
        }
    }
}

/// AI analysis of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// What the file does.
    pub description: String,
    /// Main functions or classes.
    #[serde(default)]
    pub functions: Vec<String>,
    /// `low`, `medium`, `high`, or `unknown`.
    #[serde(default = "unknown_language")]
    pub complexity: String,
    /// Improvement suggestions.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Result of the onboarding assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Onboarding {
    /// Top-level tree entries.
    pub files: Vec<TreeNode>,
    /// Analyses keyed by file path.
    #[serde(default)]
    pub analyses: BTreeMap<String, FileAnalysis>,
}

impl Onboarding {
    /// Every file in the tree, depth first.
    #[must_use]
    pub fn all_files(&self) -> Vec<&TreeNode> {
        let mut out = Vec::new();
        for node in &self.files {
            node.collect_files(&mut out);
        }
        out
    }

    /// Files whose path matches `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &str) -> Vec<&TreeNode> {
        self.all_files()
            .into_iter()
            .filter(|n| matches_filter(filter, &[n.path()]))
            .collect()
    }

    /// File counts per language, sorted by language name.
    #[must_use]
    pub fn language_breakdown(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for node in self.all_files() {
            if let TreeNode::File { language, .. } = node {
                *counts.entry(language.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl AnalysisResult for Onboarding {
    const FEATURE: Feature = Feature::Onboarding;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn onboarding() -> Onboarding {
        serde_json::from_value(json!({
            "files": [
                { "path": "README.md", "type": "file", "size": 120, "language": "markdown" },
                {
                    "path": "src",
                    "type": "folder",
                    "children": [
                        { "path": "src/main.py", "type": "file", "size": 600, "language": "python" },
                        {
                            "path": "src/App",
                            "type": "folder",
                            "children": [
                                { "path": "src/App/utils.py", "type": "file", "language": "python" }
                            ]
                        }
                    ]
                }
            ],
            "analyses": {
                "README.md": {
                    "description": "Project overview.",
                    "functions": [],
                    "complexity": "low",
                    "suggestions": ["Add setup steps."]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn flattens_nested_tree() {
        let o = onboarding();
        let paths: Vec<&str> = o.all_files().iter().map(|n| n.path()).collect();
        assert_eq!(paths, vec!["README.md", "src/main.py", "src/App/utils.py"]);
    }

    #[test]
    fn name_is_last_component() {
        let o = onboarding();
        assert_eq!(o.files[1].name(), "src");
        assert_eq!(o.all_files()[2].name(), "utils.py");
    }

    #[test]
    fn language_breakdown_counts_files() {
        let o = onboarding();
        let breakdown = o.language_breakdown();
        assert_eq!(breakdown.get("python"), Some(&2));
        assert_eq!(breakdown.get("markdown"), Some(&1));
    }

    #[test]
    fn filter_by_path() {
        let o = onboarding();
        assert_eq!(o.filtered("app/").len(), 1);
    }

    #[test]
    fn unknown_node_type_is_rejected() {
        let result: Result<Onboarding, _> = serde_json::from_value(json!({
            "files": [{ "path": "x", "type": "symlink" }]
        }));
        assert!(result.is_err());
    }
}
