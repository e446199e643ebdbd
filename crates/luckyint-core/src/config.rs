//! Runtime parse-mode configuration.
//!
//! The parse mode is set via the `LUCKYINT_MODE` environment variable:
//! - `strict` (default): every token on the input line must be a decimal
//!   integer that fits in `i64`. Anything else is a parse error.
//! - `lenient`: tokens that are not integers (or overflow `i64`) are skipped
//!   and reported back to the caller instead of failing the whole line.

/// Environment variable consulted by [`parse_mode_from_env`].
pub const MODE_ENV_VAR: &str = "LUCKYINT_MODE";

/// How the line parser treats tokens that are not valid integers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Reject the line on the first invalid token.
    #[default]
    Strict,
    /// Skip invalid tokens and keep going.
    Lenient,
}

impl ParseMode {
    /// Parse from string (case-insensitive). Unknown values map to `Strict`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" | "loose" | "skip" => Self::Lenient,
            _ => Self::Strict,
        }
    }

    /// Canonical lowercase name, as used in logs and fixtures.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    /// Returns true if invalid tokens are skipped rather than rejected.
    #[must_use]
    pub const fn skips_invalid(self) -> bool {
        matches!(self, Self::Lenient)
    }
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the parse mode from an optional raw setting (e.g. an env value).
#[must_use]
pub fn resolve_parse_mode(raw: Option<&str>) -> ParseMode {
    raw.map(ParseMode::from_str_loose).unwrap_or_default()
}

/// Read the parse mode from `LUCKYINT_MODE`, defaulting to `Strict`.
#[must_use]
pub fn parse_mode_from_env() -> ParseMode {
    resolve_parse_mode(std::env::var(MODE_ENV_VAR).ok().as_deref())
}
