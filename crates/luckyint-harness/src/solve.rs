//! One-line solve pipeline: parse -> compute.

use std::io::BufRead;

use luckyint_core::{
    FrequencyTable, LuckyIntegerFinder, NO_LUCKY_INTEGER, ParseError, ParseMode, SkippedToken,
    parse_line,
};

/// Everything learned from solving one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub values: Vec<i64>,
    pub skipped: Vec<SkippedToken>,
    /// Every lucky value, ascending.
    pub lucky_values: Vec<i64>,
    /// Largest lucky value, or `-1`.
    pub result: i64,
}

impl Solution {
    /// The line printed on stdout (without the trailing newline).
    #[must_use]
    pub fn output(&self) -> String {
        self.result.to_string()
    }

    #[must_use]
    pub fn found(&self) -> bool {
        self.result != NO_LUCKY_INTEGER
    }
}

/// Read one line from `reader`, including its terminator if present.
///
/// Invalid UTF-8 is replaced with U+FFFD, so it reaches the parser as an
/// ordinary non-integer token.
pub fn read_line_lossy<R: BufRead>(reader: &mut R) -> std::io::Result<String> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse `line` under `mode` and compute its largest lucky integer.
pub fn solve_line(line: &str, mode: ParseMode) -> Result<Solution, ParseError> {
    let parsed = parse_line(line, mode)?;
    let result = LuckyIntegerFinder::new().find_or_sentinel(&parsed.values);
    let lucky_values = FrequencyTable::from_values(&parsed.values).lucky_values();
    Ok(Solution {
        values: parsed.values,
        skipped: parsed.skipped,
        lucky_values,
        result,
    })
}
