//! Report generation for fixture verification.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A fixture file that contributed cases to a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSource {
    pub path: String,
    pub sha256: String,
    pub cases: usize,
}

/// A conformance report over one or more fixture sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Parse modes exercised (e.g. `strict+lenient`).
    pub mode: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    #[serde(default)]
    pub sources: Vec<FixtureSource>,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Mode: {}\n", self.mode));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        if !self.sources.is_empty() {
            out.push_str("| Fixture | Cases | SHA-256 |\n");
            out.push_str("|---------|-------|---------|\n");
            for s in &self.sources {
                out.push_str(&format!("| {} | {} | `{}` |\n", s.path, s.cases, s.sha256));
            }
            out.push('\n');
        }

        out.push_str("| Case | Family | Mode | Expected | Actual | Status |\n");
        out.push_str("|------|--------|------|----------|--------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                r.case_name, r.family, r.mode, r.expected, r.actual, status
            ));
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
