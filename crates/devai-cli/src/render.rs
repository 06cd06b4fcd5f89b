//! Plain-text rendering of decoded results.

use std::fmt;

use devai_core::results::{
    ActivityFeed, CodeReview, CommitAnalysis, CommitHistory, Documentation, Insights, Onboarding,
    SecurityScan, TreeNode,
};

/// A result that can be printed to the terminal.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Display adapter for [`Render`] types.
pub struct Report<'a, R>(pub &'a R);

impl<R: Render> fmt::Display for Report<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

const RULE: &str = "------------------------------------------------------------";

impl Render for CodeReview {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pr_number {
            Some(n) => writeln!(f, "Code review for PR #{n}")?,
            None => writeln!(f, "Code review")?,
        }
        writeln!(
            f,
            "{} files, {} changed lines analyzed",
            self.files.len(),
            self.total_changes()
        )?;
        for review in &self.files {
            writeln!(f, "{RULE}")?;
            writeln!(f, "File: {} ({} changes)", review.file, review.changes_count)?;
            writeln!(f, "{}", review.suggestions)?;
        }
        Ok(())
    }
}

impl Render for Insights {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Productivity metrics")?;
        writeln!(
            f,
            "  Avg PR turnaround:   {:.1} hours ({:.1} days)",
            self.avg_turnaround_hours,
            self.avg_turnaround_days()
        )?;
        writeln!(f, "  Merged PRs:          {}", self.merged_prs)?;
        writeln!(f, "  Lines added:         {}", self.total_additions)?;
        writeln!(f, "  Lines deleted:       {}", self.total_deletions)?;
        writeln!(f, "  Net lines changed:   {}", self.net_lines())?;
        writeln!(f, "  Contributors:        {}", self.contributors)?;
        writeln!(f, "  Avg changes per PR:  {:.0}", self.avg_changes_per_pr())?;
        if !self.recent_activity.is_empty() {
            writeln!(f, "\nRecent activity")?;
            for record in &self.recent_activity {
                writeln!(
                    f,
                    "  {}  {:<8} {:<12} {}",
                    record.date, record.kind, record.author, record.title
                )?;
            }
        }
        Ok(())
    }
}

impl Render for CommitAnalysis {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Commit {}: {}", self.sha, self.rating)?;
        writeln!(f, "Message: {}", self.message.lines().next().unwrap_or_default())?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", self.analysis)
    }
}

impl Render for Documentation {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Documentation for {} ({} files, {} failed)",
            self.repo,
            self.docs.len(),
            self.failed_count()
        )?;
        for doc in &self.docs {
            writeln!(f, "{RULE}")?;
            writeln!(
                f,
                "## {} [{}, {} lines, {:?}]",
                doc.path, doc.language, doc.lines_count, doc.status
            )?;
            for function in &doc.functions {
                writeln!(
                    f,
                    "  - {}({}): {}",
                    function.name,
                    function.params.join(", "),
                    function.description
                )?;
            }
            writeln!(f, "{}", doc.documentation)?;
        }
        Ok(())
    }
}

impl Render for SecurityScan {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pr_number {
            Some(n) => writeln!(f, "Security scan for PR #{n}")?,
            None => writeln!(f, "Security scan")?,
        }
        writeln!(
            f,
            "{} files scanned, {} flagged",
            self.files.len(),
            self.flagged().len()
        )?;
        for scan in &self.files {
            writeln!(f, "{RULE}")?;
            writeln!(f, "File: {} ({} lines scanned)", scan.file, scan.lines_scanned)?;
            writeln!(f, "{}", scan.issues)?;
        }
        Ok(())
    }
}

impl Render for CommitHistory {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = self.totals();
        writeln!(
            f,
            "{} commits (+{} -{})",
            self.commits.len(),
            totals.additions,
            totals.deletions
        )?;
        for commit in &self.commits {
            writeln!(
                f,
                "  {} | {} | {}: {}",
                commit.date,
                commit.short_sha(),
                commit.author,
                commit.message
            )?;
        }
        writeln!(f, "\nSummary")?;
        writeln!(f, "{}", self.summary)
    }
}

fn render_tree(f: &mut fmt::Formatter<'_>, nodes: &[TreeNode], depth: usize) -> fmt::Result {
    for node in nodes {
        let indent = "  ".repeat(depth + 1);
        match node {
            TreeNode::Folder { children, .. } => {
                writeln!(f, "{indent}{}/", node.name())?;
                render_tree(f, children, depth + 1)?;
            }
            TreeNode::File { language, .. } => {
                writeln!(f, "{indent}{} ({language})", node.name())?;
            }
        }
    }
    Ok(())
}

impl Render for Onboarding {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Repository structure ({} files)", self.all_files().len())?;
        render_tree(f, &self.files, 0)?;
        for (path, analysis) in &self.analyses {
            writeln!(f, "{RULE}")?;
            writeln!(f, "{path} [complexity: {}]", analysis.complexity)?;
            writeln!(f, "{}", analysis.description)?;
            for suggestion in &analysis.suggestions {
                writeln!(f, "  * {suggestion}")?;
            }
        }
        Ok(())
    }
}

impl Render for ActivityFeed {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notifications.is_empty() {
            return writeln!(f, "No recent activity.");
        }
        for n in &self.notifications {
            writeln!(f, "{} {} by {} ({})", n.time, n.event, n.actor, n.operation)?;
            if !n.updates.is_empty() {
                writeln!(f, "    {}", n.updates)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devai_core::samples;

    #[test]
    fn insights_report_includes_derived_metrics() {
        let output = Report(&samples::insights()).to_string();
        assert!(output.contains("Merged PRs:          42"));
        assert!(output.contains("Net lines changed:   7250"));
        assert!(output.contains("Recent activity"));
    }

    #[test]
    fn onboarding_tree_is_indented() {
        let onboarding: Onboarding = serde_json::from_value(serde_json::json!({
            "files": [{
                "path": "src",
                "type": "folder",
                "children": [{ "path": "src/main.rs", "type": "file", "language": "rust" }]
            }]
        }))
        .unwrap();

        let output = Report(&onboarding).to_string();
        assert!(output.contains("  src/\n    main.rs (rust)"));
    }

    #[test]
    fn empty_activity_feed() {
        let feed = ActivityFeed {
            notifications: Vec::new(),
        };
        assert_eq!(Report(&feed).to_string(), "No recent activity.\n");
    }
}
