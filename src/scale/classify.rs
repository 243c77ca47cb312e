use regex::Regex;
use std::sync::LazyLock;

use crate::scale::types::GradeType;
use crate::scale::utility::{compile, is_match};

static LETTER: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[A-Z][+\-*]?$"));
static PERCENTAGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[0-9]{1,10}(?:[.,][0-9]{1,2})?%$"));
static NUMERIC: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9]+(?:[.,][0-9]+)?$"));

/// Classifies a raw grade string.
///
/// Total over all input: blanks and anything that is not a single letter
/// (optionally with `+`, `-` or `*`), a decimal, or a decimal percentage come
/// back as [`GradeType::Invalid`].
pub fn get_grade_type(grade: &str) -> GradeType {
    let trimmed = grade.trim();
    if trimmed.is_empty() {
        return GradeType::Invalid;
    }

    if is_match(&LETTER, &trimmed.to_ascii_uppercase()) {
        GradeType::Letter
    } else if is_match(&PERCENTAGE, trimmed) {
        GradeType::Percentage
    } else if is_match(&NUMERIC, trimmed) {
        GradeType::Numeric
    } else {
        GradeType::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grades() {
        assert_eq!(get_grade_type("A+"), GradeType::Letter);
        assert_eq!(get_grade_type("b"), GradeType::Letter);
        assert_eq!(get_grade_type(" C- "), GradeType::Letter);
        assert_eq!(get_grade_type("F*"), GradeType::Letter);
    }

    #[test]
    fn test_numeric_grades() {
        assert_eq!(get_grade_type("3,5"), GradeType::Numeric);
        assert_eq!(get_grade_type("1.0"), GradeType::Numeric);
        assert_eq!(get_grade_type("110"), GradeType::Numeric);
        assert_eq!(get_grade_type("2.12345"), GradeType::Numeric);
    }

    #[test]
    fn test_percentage_grades() {
        assert_eq!(get_grade_type("85%"), GradeType::Percentage);
        assert_eq!(get_grade_type("85,5%"), GradeType::Percentage);
        assert_eq!(get_grade_type("99.75%"), GradeType::Percentage);
    }

    #[test]
    fn test_percentage_fraction_is_capped_at_two_digits() {
        assert_eq!(get_grade_type("85.125%"), GradeType::Invalid);
        assert_eq!(get_grade_type("12345678901%"), GradeType::Invalid);
    }

    #[test]
    fn test_invalid_grades() {
        assert_eq!(get_grade_type(""), GradeType::Invalid);
        assert_eq!(get_grade_type("   "), GradeType::Invalid);
        assert_eq!(get_grade_type("AB"), GradeType::Invalid);
        assert_eq!(get_grade_type("A++"), GradeType::Invalid);
        assert_eq!(get_grade_type("3."), GradeType::Invalid);
        assert_eq!(get_grade_type("-1"), GradeType::Invalid);
        assert_eq!(get_grade_type("%"), GradeType::Invalid);
        assert_eq!(get_grade_type("!?#"), GradeType::Invalid);
    }

    #[test]
    fn test_non_ascii_letters_are_invalid() {
        assert_eq!(get_grade_type("ſ"), GradeType::Invalid);
        assert_eq!(get_grade_type("ı"), GradeType::Invalid);
        assert_eq!(get_grade_type("ſ+"), GradeType::Invalid);
        assert_eq!(get_grade_type("é"), GradeType::Invalid);
    }

    #[test]
    fn test_huge_input_is_classified() {
        let digits = "7".repeat(2_000_000);
        assert_eq!(get_grade_type(&digits), GradeType::Numeric);

        let garbage = "x%".repeat(1_000_000);
        assert_eq!(get_grade_type(&garbage), GradeType::Invalid);
    }
}
