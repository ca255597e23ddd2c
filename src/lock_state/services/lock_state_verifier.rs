use crate::lock_state::domain::rendered_line::ARROW;
use std::collections::HashMap;

/// Outcome of comparing rendered lines with an expected lock state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerificationResult {
    /// Expected lines that were not rendered, one entry per surplus copy
    pub missing: Vec<String>,
    /// Rendered lines the expected file does not list
    pub unexpected: Vec<String>,
    /// Same lines on both sides, different order
    pub out_of_order: bool,
}

impl VerificationResult {
    pub fn is_up_to_date(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && !self.out_of_order
    }
}

/// LockStateVerifier compares a rendered lock state against an expected one.
///
/// Pure logic with no I/O; the expected file content is handed in by the use case.
/// Both sides go through `canonical_line` so a file written by the text
/// formatter always verifies against the report it came from.
pub struct LockStateVerifier;

impl LockStateVerifier {
    /// Parses expected lock-state content: one line per component, surrounding
    /// whitespace trimmed, blank lines skipped. A line starting with `#` is a
    /// comment unless it holds a ` -> ` entry (ids may start with `#`).
    pub fn parse_expected(content: &str) -> Vec<String> {
        content
            .lines()
            .map(Self::canonical_line)
            .filter(|line| !line.is_empty() && !Self::is_comment(line))
            .map(str::to_string)
            .collect()
    }

    /// The form a line is compared in
    pub fn canonical_line(line: &str) -> &str {
        line.trim()
    }

    fn is_comment(line: &str) -> bool {
        line.starts_with('#') && !line.contains(ARROW.trim())
    }

    /// Compares `expected` with `actual`, both in the order they appear.
    ///
    /// Lines are matched as a multiset: a line listed twice in `expected` but
    /// rendered once is reported once in `missing`.
    pub fn verify(expected: &[String], actual: &[String]) -> VerificationResult {
        let expected: Vec<&str> = expected.iter().map(|l| Self::canonical_line(l)).collect();
        let actual: Vec<&str> = actual.iter().map(|l| Self::canonical_line(l)).collect();

        let missing = Self::surplus(&expected, &actual);
        let unexpected = Self::surplus(&actual, &expected);
        let out_of_order = missing.is_empty() && unexpected.is_empty() && expected != actual;

        VerificationResult {
            missing,
            unexpected,
            out_of_order,
        }
    }

    /// Lines of `from` left over once each line of `against` has cancelled one copy
    fn surplus(from: &[&str], against: &[&str]) -> Vec<String> {
        let mut available: HashMap<&str, usize> = HashMap::new();
        for &line in against {
            *available.entry(line).or_default() += 1;
        }

        from.iter()
            .filter(|line| match available.get_mut(*line) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    false
                }
                _ => true,
            })
            .map(|line| line.to_string())
            .collect()
    }
}
