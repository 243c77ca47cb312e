use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::scale::types::GradeRange;
use crate::scale::utility::compile;

static LETTER_GRADE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^([A-Z])([+\-*])?$"));

/// Rank returned for anything that is not a letter grade. Large enough to
/// fall outside every letter range.
pub const UNRANKED: f64 = 999.0;

const MODIFIER_STEP: f64 = 0.3;

fn split_letter(grade: &str) -> Option<(char, Option<char>)> {
    let re = LETTER_GRADE.as_ref()?;
    let caps = re.captures(grade)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    let modifier = caps.get(2).and_then(|m| m.as_str().chars().next());
    Some((letter, modifier))
}

/// Proposes limits for a letter grade. Expects upper-cased, trimmed input.
///
/// Any modifier lifts the best grade to `A+`. Letters `A` to `E` are read as
/// the common five-step scale ending at `E`; any other letter is taken as the
/// worst grade of its own scale.
pub fn detect_letter_grade(grade: &str) -> Option<GradeRange> {
    let (letter, modifier) = split_letter(grade)?;

    let upper = if modifier.is_some() { "A+" } else { "A" };
    let lower = if ('A'..='E').contains(&letter) {
        "E".to_string()
    } else {
        letter.to_string()
    };

    debug!(grade, upper, lower = %lower, "Letter grade scale proposed");
    Some(GradeRange::new(upper, lower))
}

/// Ranks a letter grade: `A` is 1, `B` is 2 and so on. `+` and `*` improve
/// the rank by 0.3, `-` worsens it by 0.3. Lower ranks are better grades.
pub fn get_letter_value(grade: &str) -> f64 {
    let Some((letter, modifier)) = split_letter(&grade.trim().to_ascii_uppercase()) else {
        return UNRANKED;
    };

    let base = f64::from(letter as u32 - 'A' as u32 + 1);
    match modifier {
        Some('+') | Some('*') => base - MODIFIER_STEP,
        Some('-') => base + MODIFIER_STEP,
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_plain_letter_on_common_scale() {
        assert_eq!(detect_letter_grade("C"), Some(GradeRange::new("A", "E")));
        assert_eq!(detect_letter_grade("A"), Some(GradeRange::new("A", "E")));
        assert_eq!(detect_letter_grade("E"), Some(GradeRange::new("A", "E")));
    }

    #[test]
    fn test_modifier_lifts_upper_limit() {
        assert_eq!(detect_letter_grade("B+"), Some(GradeRange::new("A+", "E")));
        assert_eq!(detect_letter_grade("D-"), Some(GradeRange::new("A+", "E")));
        assert_eq!(detect_letter_grade("A*"), Some(GradeRange::new("A+", "E")));
    }

    #[test]
    fn test_uncommon_letter_is_its_own_lower_limit() {
        assert_eq!(detect_letter_grade("F"), Some(GradeRange::new("A", "F")));
        assert_eq!(detect_letter_grade("G-"), Some(GradeRange::new("A+", "G")));
        assert_eq!(detect_letter_grade("Z"), Some(GradeRange::new("A", "Z")));
    }

    #[test]
    fn test_non_letter_input() {
        assert_eq!(detect_letter_grade("AB"), None);
        assert_eq!(detect_letter_grade("3"), None);
        assert_eq!(detect_letter_grade("a"), None);
        assert_eq!(detect_letter_grade(""), None);
    }

    #[test]
    fn test_letter_values() {
        assert_close(get_letter_value("A"), 1.0);
        assert_close(get_letter_value("E"), 5.0);
        assert_close(get_letter_value("A+"), 0.7);
        assert_close(get_letter_value("B*"), 1.7);
        assert_close(get_letter_value("B-"), 2.3);
        assert_close(get_letter_value(" c "), 3.0);
    }

    #[test]
    fn test_unranked_letter_value() {
        assert_eq!(get_letter_value("AB"), UNRANKED);
        assert_eq!(get_letter_value("4.0"), UNRANKED);
        assert_eq!(get_letter_value(""), UNRANKED);
        assert_eq!(get_letter_value("ſ"), UNRANKED);
        assert_eq!(get_letter_value("ı+"), UNRANKED);
    }
}
