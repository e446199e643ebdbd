//! Integer line parsing.
//!
//! A line is split on runs of ASCII whitespace and commas. Each remaining
//! token must be an optional sign followed by decimal digits.

use thiserror::Error;

use crate::config::ParseMode;

/// Why a token could not be turned into an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("token {index} ('{token}') is not an integer")]
    InvalidToken { index: usize, token: String },
    #[error("token {index} ('{token}') does not fit in a 64-bit integer")]
    OutOfRange { index: usize, token: String },
}

impl ParseError {
    /// Position of the offending token on the line (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidToken { index, .. } | Self::OutOfRange { index, .. } => *index,
        }
    }

    /// The offending token text.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidToken { token, .. } | Self::OutOfRange { token, .. } => token,
        }
    }
}

/// A token dropped in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    pub index: usize,
    pub token: String,
    pub reason: ParseError,
}

/// Result of parsing one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    pub values: Vec<i64>,
    /// Always empty in strict mode.
    pub skipped: Vec<SkippedToken>,
}

fn is_delimiter(c: char) -> bool {
    c == ',' || c.is_ascii_whitespace()
}

/// Split `line` into its non-empty tokens.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_delimiter).filter(|token| !token.is_empty())
}

fn parse_token(index: usize, token: &str) -> Result<i64, ParseError> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidToken {
            index,
            token: token.to_string(),
        });
    }
    // Shape is already validated, so the only remaining failure is overflow.
    token.parse::<i64>().map_err(|_| ParseError::OutOfRange {
        index,
        token: token.to_string(),
    })
}

/// Parse a line, keeping track of anything lenient mode dropped.
pub fn parse_line(line: &str, mode: ParseMode) -> Result<ParsedLine, ParseError> {
    let mut parsed = ParsedLine::default();
    for (index, token) in tokens(line).enumerate() {
        match parse_token(index, token) {
            Ok(value) => parsed.values.push(value),
            Err(reason) if mode.skips_invalid() => parsed.skipped.push(SkippedToken {
                index,
                token: token.to_string(),
                reason,
            }),
            Err(err) => return Err(err),
        }
    }
    Ok(parsed)
}

/// Parse a whitespace/comma separated line of integers.
pub fn parse_ints(line: &str, mode: ParseMode) -> Result<Vec<i64>, ParseError> {
    parse_line(line, mode).map(|parsed| parsed.values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_commas() {
        assert_eq!(
            parse_ints("2, 2,3\t4", ParseMode::Strict).unwrap(),
            vec![2, 2, 3, 4]
        );
        assert_eq!(
            parse_ints(" 1 ,, 2 ,\n", ParseMode::Strict).unwrap(),
            vec![1, 2]
        );
    }

    #[test]
    fn empty_and_delimiter_only_lines_yield_nothing() {
        assert!(parse_ints("", ParseMode::Strict).unwrap().is_empty());
        assert!(parse_ints(" , ,\t", ParseMode::Strict).unwrap().is_empty());
    }

    #[test]
    fn signs_are_accepted() {
        assert_eq!(
            parse_ints("-3 +4 0 -0", ParseMode::Strict).unwrap(),
            vec![-3, 4, 0, 0]
        );
    }

    #[test]
    fn strict_rejects_garbage_with_position() {
        let err = parse_ints("1 2 x3 4", ParseMode::Strict).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                index: 2,
                token: "x3".to_string()
            }
        );
        assert_eq!(err.index(), 2);
        assert_eq!(err.token(), "x3");
    }

    #[test]
    fn bare_sign_is_not_an_integer() {
        assert!(matches!(
            parse_ints("-", ParseMode::Strict),
            Err(ParseError::InvalidToken { index: 0, .. })
        ));
        assert!(matches!(
            parse_ints("1 +-2", ParseMode::Strict),
            Err(ParseError::InvalidToken { index: 1, .. })
        ));
    }

    #[test]
    fn strict_reports_overflow() {
        let err = parse_ints("1 99999999999999999999", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ParseError::OutOfRange { index: 1, .. }));
        assert!(err.to_string().contains("64-bit"));
    }

    #[test]
    fn extreme_values_parse() {
        let line = format!("{} {}", i64::MIN, i64::MAX);
        assert_eq!(
            parse_ints(&line, ParseMode::Strict).unwrap(),
            vec![i64::MIN, i64::MAX]
        );
    }

    #[test]
    fn lenient_skips_and_records_bad_tokens() {
        let parsed = parse_line("2 two 2 1.5 99999999999999999999", ParseMode::Lenient).unwrap();
        assert_eq!(parsed.values, vec![2, 2]);
        let skipped: Vec<_> = parsed.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 3, 4]);
        assert!(matches!(
            parsed.skipped[2].reason,
            ParseError::OutOfRange { .. }
        ));
    }

    #[test]
    fn strict_never_records_skips() {
        let parsed = parse_line("1 2 3", ParseMode::Strict).unwrap();
        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.values, vec![1, 2, 3]);
    }
}
