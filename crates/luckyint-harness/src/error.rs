//! Harness error type.

use std::path::PathBuf;

use luckyint_core::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse: {0}")]
    Parse(#[from] ParseError),
    #[error("no fixture JSON files found in {}", dir.display())]
    NoFixtures { dir: PathBuf },
    #[error("invalid fixture {}: {reason}", path.display())]
    InvalidFixture { path: PathBuf, reason: String },
    #[error("no fixture case ran under mode {mode}")]
    NoCases { mode: String },
    #[error("verification failed: {failed} of {total} cases failed")]
    VerificationFailed { failed: usize, total: usize },
    #[error("{} has {errors} invalid log line(s)", path.display())]
    InvalidLog { path: PathBuf, errors: usize },
}
