/// Characters that make a bracketed constraint a range rather than one exact version
const RANGE_SYNTAX: [char; 5] = ['[', ']', '(', ')', ','];

/// ConstraintNormalizer strips cosmetic exact-version wrapping from a constraint.
///
/// Pure and total: anything that is not `[<version>]` comes back unchanged.
pub struct ConstraintNormalizer;

impl ConstraintNormalizer {
    /// Reduces `[1.27.1]` to `1.27.1`; every other input is returned as-is.
    ///
    /// Ranges such as `[1.0,2.0)` or `[1.0,2.0]` and the empty pair `[]` pass
    /// through untouched. The result never has the exact-version form, so
    /// normalizing twice changes nothing.
    pub fn normalize(raw: &str) -> &str {
        raw.strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .filter(|inner| !inner.is_empty() && !inner.contains(RANGE_SYNTAX))
            .unwrap_or(raw)
    }
}
