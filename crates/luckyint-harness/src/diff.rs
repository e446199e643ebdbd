//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let len = expected_lines.len().max(actual_lines.len()).max(1);
    for i in 0..len {
        let e = expected_lines.get(i).copied().unwrap_or("");
        let a = actual_lines.get(i).copied().unwrap_or("");
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            out.push_str(&format!("-{e}\n"));
            out.push_str(&format!("+{a}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs() {
        assert_eq!(render_diff("3", "3"), "[identical]");
    }

    #[test]
    fn single_line_mismatch() {
        assert_eq!(
            render_diff("3", "-1"),
            "--- expected\n+++ actual\n@@ line 1 @@\n-3\n+-1\n"
        );
    }

    #[test]
    fn missing_line_is_shown() {
        let diff = render_diff("a\nb", "a");
        assert!(diff.contains("@@ line 2 @@\n-b\n+\n"));
        assert!(!diff.contains("@@ line 1 @@"));
    }
}
