use tracing::debug;

use crate::scale::classify::get_grade_type;
use crate::scale::detect::detect_grading_scale;
use crate::scale::types::{GradeRange, GradeType};
use crate::scale::utility::{add_percentage, strip_percentage};

/// Reformats stored limits to match the grade as it is now: percentage
/// limits for a percentage grade, bare limits for anything else.
///
/// Idempotent for a fixed grade.
pub fn normalize_limits_for_grade(grade: &str, limits: &GradeRange) -> GradeRange {
    let is_percentage = get_grade_type(grade) == GradeType::Percentage;

    let format: fn(&str) -> String = if is_percentage {
        add_percentage
    } else {
        strip_percentage
    };

    GradeRange::new(format(&limits.upper_limit), format(&limits.lower_limit))
        .with_percentage(is_percentage)
}

/// Limits to show after the grade was edited.
///
/// Limits the user set by hand are kept and only reformatted; otherwise a
/// fresh proposal replaces them.
pub fn refresh_limits(
    grade: &str,
    stored: Option<&GradeRange>,
    manually_set: bool,
) -> Option<GradeRange> {
    match stored {
        Some(limits) if manually_set => {
            debug!(grade, "Keeping manually set limits");
            Some(normalize_limits_for_grade(grade, limits))
        }
        _ => detect_grading_scale(grade),
    }
}
