//! Fixture loading and management.

use luckyint_core::ParseMode;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::HarnessError;

/// Expected output for lines that must be rejected by the parser.
pub const EXPECT_ERROR: &str = "error";

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Raw input line, exactly as it would arrive on stdin.
    pub input: String,
    /// Expected stdout line (without newline), or `"error"`.
    pub expected: String,
    /// Parse mode(s) the case applies to.
    #[serde(default)]
    pub mode: CaseMode,
}

/// Which parse modes a fixture case runs under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Strict,
    Lenient,
    #[default]
    Both,
}

impl CaseMode {
    /// Returns true if the case should run under `mode`.
    #[must_use]
    pub fn applies_to(self, mode: ParseMode) -> bool {
        match self {
            Self::Both => true,
            Self::Strict => mode == ParseMode::Strict,
            Self::Lenient => mode == ParseMode::Lenient,
        }
    }
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Case family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// A fixture set together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedFixture {
    pub path: std::path::PathBuf,
    /// Lowercase hex SHA-256 of the file contents.
    pub sha256: String,
    pub set: FixtureSet,
}

impl LoadedFixture {
    pub fn load(path: &std::path::Path) -> Result<Self, HarnessError> {
        let bytes = std::fs::read(path)?;
        let set: FixtureSet = serde_json::from_slice(&bytes)?;
        Ok(Self {
            path: path.to_path_buf(),
            sha256: sha256_hex(&bytes),
            set,
        })
    }
}

/// Lowercase hex SHA-256 digest of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Every `*.json` file directly inside `dir`, sorted by path.
pub fn fixture_paths(dir: &std::path::Path) -> Result<Vec<std::path::PathBuf>, HarnessError> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_mode_defaults_to_both() {
        let set = FixtureSet::from_json(
            r#"{"version":"v1","family":"lucky","captured_at":"2026-10-19T00:00:00Z",
                "cases":[{"name":"pair","input":"2 2 3 4","expected":"2"}]}"#,
        )
        .expect("valid fixture json");
        assert_eq!(set.cases.len(), 1);
        assert_eq!(set.cases[0].mode, CaseMode::Both);
    }

    #[test]
    fn unknown_case_mode_is_rejected() {
        let err = FixtureSet::from_json(
            r#"{"version":"v1","family":"lucky","captured_at":"2026-10-19T00:00:00Z",
                "cases":[{"name":"bad","input":"5","expected":"5","mode":"stict"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("stict"), "{err}");
    }

    #[test]
    fn case_mode_selects_parse_modes() {
        assert!(CaseMode::Both.applies_to(ParseMode::Strict));
        assert!(CaseMode::Both.applies_to(ParseMode::Lenient));
        assert!(CaseMode::Strict.applies_to(ParseMode::Strict));
        assert!(!CaseMode::Strict.applies_to(ParseMode::Lenient));
        assert!(CaseMode::Lenient.applies_to(ParseMode::Lenient));
        assert!(!CaseMode::Lenient.applies_to(ParseMode::Strict));
    }

    #[test]
    fn to_json_reloads() {
        let set = FixtureSet {
            version: "v1".into(),
            family: "lucky".into(),
            captured_at: "2026-10-19T00:00:00Z".into(),
            cases: vec![FixtureCase {
                name: "empty".into(),
                input: String::new(),
                expected: "-1".into(),
                mode: CaseMode::Strict,
            }],
        };
        let reloaded = FixtureSet::from_json(&set.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.cases[0].expected, "-1");
        assert_eq!(reloaded.cases[0].mode, CaseMode::Strict);
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
