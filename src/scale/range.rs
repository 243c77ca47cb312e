//! Range membership for grades on scales of either direction.

use crate::scale::classify::get_grade_type;
use crate::scale::letter::get_letter_value;
use crate::scale::types::{GradeRange, GradeType};
use crate::scale::utility::parse_decimal;

/// Whether `value` lies between `upper` and `lower`, whichever of the two is
/// numerically smaller.
fn within(value: f64, upper: f64, lower: f64) -> bool {
    if upper < lower {
        value >= upper && value <= lower
    } else {
        value >= lower && value <= upper
    }
}

/// Checks a letter grade against letter limits. Unrecognized letters rank
/// far outside any range and so return `false`.
pub fn is_letter_in_range(grade: &str, upper: &str, lower: &str) -> bool {
    within(
        get_letter_value(grade),
        get_letter_value(upper),
        get_letter_value(lower),
    )
}

/// Checks a numeric or percentage grade against numeric limits. Returns
/// `false` if any of the three fails to parse.
pub fn is_numeric_in_range(grade: &str, upper: &str, lower: &str) -> bool {
    match (parse_decimal(grade), parse_decimal(upper), parse_decimal(lower)) {
        (Some(value), Some(upper), Some(lower)) => within(value, upper, lower),
        _ => false,
    }
}

/// Checks a grade against a range, picking the letter or numeric comparison
/// from the grade's type. Invalid grades are never in range.
pub fn is_grade_in_range(grade: &str, range: &GradeRange) -> bool {
    match get_grade_type(grade) {
        GradeType::Letter => is_letter_in_range(grade, &range.upper_limit, &range.lower_limit),
        GradeType::Numeric | GradeType::Percentage => {
            is_numeric_in_range(grade, &range.upper_limit, &range.lower_limit)
        }
        GradeType::Invalid => false,
    }
}
