use std::fmt;

use crate::error::{ProcessorError, Result};

// ---------------------------------------------------------------------------
// OperatorKind – the comparison a filter applies to one cell
// ---------------------------------------------------------------------------

/// Comparison applied between a cell value and the filter target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Case-insensitive text equality.
    Equals,
    /// Numeric `>`; false when either side is not a number.
    GreaterThan,
    /// Numeric `<`; false when either side is not a number.
    LessThan,
}

/// Tokens accepted in the middle segment of a filter spec.
///
/// `>=` and `<=` resolve to the strict comparisons, so rows equal to the
/// target are excluded. This is likely a defect in the grammar; it is kept
/// on purpose and pinned by `inclusive_aliases_stay_strict`.
pub const OPERATOR_ALIASES: &[(&str, OperatorKind)] = &[
    ("==", OperatorKind::Equals),
    ("eq", OperatorKind::Equals),
    (">", OperatorKind::GreaterThan),
    ("gt", OperatorKind::GreaterThan),
    (">=", OperatorKind::GreaterThan),
    ("<", OperatorKind::LessThan),
    ("lt", OperatorKind::LessThan),
    ("<=", OperatorKind::LessThan),
];

impl OperatorKind {
    /// Resolve an operator token through [`OPERATOR_ALIASES`]. Tokens are
    /// matched exactly; `EQ` is not `eq`.
    pub fn from_token(token: &str) -> Result<Self> {
        OPERATOR_ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| ProcessorError::UnsupportedOperator(token.to_string()))
    }

    /// Canonical short token.
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorKind::Equals => "eq",
            OperatorKind::GreaterThan => "gt",
            OperatorKind::LessThan => "lt",
        }
    }

    /// Decide whether `value` satisfies the predicate against `target`.
    pub fn apply(self, value: &str, target: &str) -> bool {
        match self {
            OperatorKind::Equals => value.to_lowercase() == target.to_lowercase(),
            OperatorKind::GreaterThan => compare_numeric(value, target, |a, b| a > b),
            OperatorKind::LessThan => compare_numeric(value, target, |a, b| a < b),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a cell as `f64`, tolerating surrounding whitespace.
/// `None` means "not a number" and is never an error.
pub fn coerce_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

fn compare_numeric(value: &str, target: &str, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (coerce_f64(value), coerce_f64(target)) {
        (Some(v), Some(t)) => cmp(v, t),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_folds_case_only() {
        let op = OperatorKind::Equals;
        assert!(op.apply("apple", "apple"));
        assert!(op.apply("Apple", "aPPLE"));
        assert!(!op.apply("apple", "samsung"));
        assert!(op.apply("123", "123"));
        // no numeric coercion and no trimming
        assert!(!op.apply("1.0", "1"));
        assert!(!op.apply(" apple", "apple"));
    }

    #[test]
    fn equals_matches_lowercase_comparison() {
        let pairs = [("ÄBC", "äbc"), ("Xiaomi", "XIAOMI"), ("a", "b"), ("", "")];
        for (v, t) in pairs {
            assert_eq!(
                OperatorKind::Equals.apply(v, t),
                v.to_lowercase() == t.to_lowercase()
            );
            assert_eq!(
                OperatorKind::Equals.apply(v, t),
                OperatorKind::Equals.apply(t, v)
            );
        }
    }

    #[test]
    fn greater_than_compares_numerically() {
        let op = OperatorKind::GreaterThan;
        assert!(op.apply("10", "5"));
        assert!(!op.apply("5", "10"));
        assert!(op.apply("10.5", "10"));
        assert!(!op.apply("10", "10"));
        assert!(op.apply("1e3", "999"));
    }

    #[test]
    fn less_than_compares_numerically() {
        let op = OperatorKind::LessThan;
        assert!(op.apply("5", "10"));
        assert!(!op.apply("10", "5"));
        assert!(op.apply("9.5", "10"));
        assert!(!op.apply("10", "10"));
    }

    #[test]
    fn numeric_operators_are_false_on_non_numbers() {
        for op in [OperatorKind::GreaterThan, OperatorKind::LessThan] {
            assert!(!op.apply("not_a_number", "5"));
            assert!(!op.apply("5", "not_a_number"));
            assert!(!op.apply("abc", "xyz"));
            assert!(!op.apply("", "1"));
        }
    }

    #[test]
    fn aliases_resolve_to_canonical_kinds() {
        assert_eq!(OperatorKind::from_token("==").unwrap(), OperatorKind::Equals);
        assert_eq!(OperatorKind::from_token("eq").unwrap(), OperatorKind::Equals);
        assert_eq!(OperatorKind::from_token(">").unwrap(), OperatorKind::GreaterThan);
        assert_eq!(OperatorKind::from_token("lt").unwrap(), OperatorKind::LessThan);
    }

    #[test]
    fn inclusive_aliases_stay_strict() {
        let ge = OperatorKind::from_token(">=").unwrap();
        let le = OperatorKind::from_token("<=").unwrap();
        assert_eq!(ge, OperatorKind::GreaterThan);
        assert_eq!(le, OperatorKind::LessThan);
        assert!(!ge.apply("500", "500"));
        assert!(!le.apply("500", "500"));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = OperatorKind::from_token("ne").unwrap_err();
        assert!(matches!(err, ProcessorError::UnsupportedOperator(ref t) if t == "ne"));
        assert!(OperatorKind::from_token("EQ").is_err());
    }
}
