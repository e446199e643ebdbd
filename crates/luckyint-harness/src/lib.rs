//! Command-line harness for luckyint.
//!
//! This crate provides:
//! - Solve pipeline: parse one input line, find the largest lucky integer
//! - Structured JSONL logging for solve and verify runs
//! - Fixture verify: run captured input/expected-output cases through the pipeline
//! - Report generation: human-readable + machine-readable conformance reports

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod solve;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{CaseMode, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use solve::{Solution, read_line_lossy, solve_line};
pub use verify::{VerificationResult, VerificationSummary};
