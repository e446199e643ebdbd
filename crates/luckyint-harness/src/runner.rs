//! Test execution engine.

use luckyint_core::ParseMode;

use crate::diff;
use crate::fixtures::{CaseMode, EXPECT_ERROR, FixtureCase, FixtureSet};
use crate::solve::solve_line;
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Parse mode cases are executed under.
    pub mode: ParseMode,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: ParseMode) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .filter(|case| case.mode.applies_to(self.mode))
            .map(|case| {
                let (actual, diff) = execute_case(case, self.mode);
                let case_name = if case.mode == CaseMode::Both {
                    format!("{} [{}]", case.name, self.mode)
                } else {
                    case.name.clone()
                };
                VerificationResult {
                    case_name,
                    family: fixture_set.family.clone(),
                    mode: self.mode.to_string(),
                    passed: actual == case.expected,
                    expected: case.expected.clone(),
                    actual,
                    diff,
                }
            })
            .collect()
    }

    /// Same as [`TestRunner::run`], emitting one log line per case.
    ///
    /// Cases whose mode excludes the active one are logged with
    /// [`Outcome::Skip`] after the executed cases.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        emitter: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let results = self.run(fixture_set);
        for r in &results {
            let (level, outcome) = if r.passed {
                (LogLevel::Info, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            emitter.emit_entry(
                LogEntry::new("", level, "fixture_case")
                    .with_mode(self.mode.as_str())
                    .with_outcome(outcome)
                    .with_details(serde_json::json!({
                        "campaign": self.campaign,
                        "family": r.family,
                        "case": r.case_name,
                        "expected": r.expected,
                        "actual": r.actual,
                    })),
            )?;
        }
        for case in fixture_set
            .cases
            .iter()
            .filter(|case| !case.mode.applies_to(self.mode))
        {
            emitter.emit_entry(
                LogEntry::new("", LogLevel::Debug, "fixture_case_skipped")
                    .with_mode(self.mode.as_str())
                    .with_outcome(Outcome::Skip)
                    .with_details(serde_json::json!({
                        "campaign": self.campaign,
                        "family": fixture_set.family,
                        "case": case.name,
                        "case_mode": case.mode,
                    })),
            )?;
        }
        Ok(results)
    }
}

fn execute_case(case: &FixtureCase, mode: ParseMode) -> (String, Option<String>) {
    match solve_line(&case.input, mode) {
        Ok(solution) => {
            let actual = solution.output();
            let diff_out =
                (actual != case.expected).then(|| diff::render_diff(&case.expected, &actual));
            (actual, diff_out)
        }
        Err(err) => {
            let actual = EXPECT_ERROR.to_string();
            let diff_out = (case.expected != EXPECT_ERROR).then(|| {
                format!(
                    "{}parse error: {err}\n",
                    diff::render_diff(&case.expected, &actual)
                )
            });
            (actual, diff_out)
        }
    }
}
