use regex::Regex;
use std::sync::LazyLock;

// Digits, `+`, `-` and whitespace only
static INPUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s]*$").expect("score input pattern is valid"));

/// Evaluator for manually entered scores such as `12` or `5 + 7 - 2`.
///
/// Terms are applied left to right. There is no unary minus: every
/// operator needs an integer on both sides, so `-5` and `5+` are rejected.
pub struct ScoreExpression;

impl ScoreExpression {
    /// Whether `input` only contains characters a score entry may contain
    pub fn is_acceptable_input(input: &str) -> bool {
        INPUT_PATTERN.is_match(input)
    }

    /// Absolute score described by `input`, or `None` when the entry should
    /// be discarded.
    pub fn evaluate(input: &str) -> Option<i64> {
        if input.is_empty() || !Self::is_acceptable_input(input) {
            return None;
        }

        let clean: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        let mut terms = Vec::new();
        let mut operators = Vec::new();
        let mut start = 0;
        for (i, ch) in clean.char_indices() {
            if ch == '+' || ch == '-' {
                terms.push(&clean[start..i]);
                operators.push(ch);
                start = i + 1;
            }
        }
        terms.push(&clean[start..]);

        let mut total = Self::parse_term(terms[0])?;
        for (operator, term) in operators.iter().zip(&terms[1..]) {
            let value = Self::parse_term(term)?;
            total = match operator {
                '+' => total.checked_add(value)?,
                _ => total.checked_sub(value)?,
            };
        }

        Some(total)
    }

    fn parse_term(term: &str) -> Option<i64> {
        if term.is_empty() {
            return None;
        }
        term.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_integer() {
        assert_eq!(ScoreExpression::evaluate("42"), Some(42));
        assert_eq!(ScoreExpression::evaluate("0"), Some(0));
        assert_eq!(ScoreExpression::evaluate(" 7 "), Some(7));
    }

    #[test]
    fn test_left_to_right_sum() {
        assert_eq!(ScoreExpression::evaluate("5+7-2"), Some(10));
        assert_eq!(ScoreExpression::evaluate("5 + 7 - 2"), Some(10));
        assert_eq!(ScoreExpression::evaluate("1-10"), Some(-9));
        assert_eq!(ScoreExpression::evaluate("10-3-3"), Some(4));
    }

    #[test]
    fn test_whitespace_inside_number_is_stripped() {
        assert_eq!(ScoreExpression::evaluate("1 2"), Some(12));
    }

    #[test]
    fn test_rejects_letters() {
        assert_eq!(ScoreExpression::evaluate("abc"), None);
        assert_eq!(ScoreExpression::evaluate("5+x"), None);
        assert_eq!(ScoreExpression::evaluate("3*4"), None);
    }

    #[test]
    fn test_rejects_dangling_operators() {
        assert_eq!(ScoreExpression::evaluate("-5"), None);
        assert_eq!(ScoreExpression::evaluate("5+"), None);
        assert_eq!(ScoreExpression::evaluate("5++3"), None);
        assert_eq!(ScoreExpression::evaluate("+"), None);
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(ScoreExpression::evaluate(""), None);
        assert_eq!(ScoreExpression::evaluate("   "), None);
    }

    #[test]
    fn test_large_values() {
        assert_eq!(ScoreExpression::evaluate("99999999999"), Some(99_999_999_999));
        assert_eq!(ScoreExpression::evaluate("2147483647+1"), Some(2_147_483_648));
        assert_eq!(ScoreExpression::evaluate("3000000000"), Some(3_000_000_000));
    }

    #[test]
    fn test_rejects_overflow() {
        assert_eq!(ScoreExpression::evaluate("99999999999999999999"), None);
        assert_eq!(ScoreExpression::evaluate("9223372036854775807+1"), None);
        assert_eq!(ScoreExpression::evaluate("0-9223372036854775807-2"), None);
    }

    #[test]
    fn test_acceptable_input_filter() {
        assert!(ScoreExpression::is_acceptable_input(""));
        assert!(ScoreExpression::is_acceptable_input("12 + 3"));
        assert!(!ScoreExpression::is_acceptable_input("12a"));
        assert!(!ScoreExpression::is_acceptable_input("\u{0663}"));
    }
}
