use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::scale::bands::detect_numeric_grade;
use crate::scale::letter::detect_letter_grade;
use crate::scale::types::GradeRange;
use crate::scale::utility::{compile, is_match};

static MULTI_LETTER: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[A-Z]{2,}$"));

/// Proposes best/worst limits for a raw grade, or `None` when no scale fits.
///
/// Letter grades are tried before numeric ones. Runs of two or more letters
/// are treated as abbreviations, not grades.
pub fn detect_grading_scale(grade: &str) -> Option<GradeRange> {
    let normalized = grade.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return None;
    }

    if is_match(&MULTI_LETTER, &normalized) {
        debug!(grade = %normalized, "Multi-letter grade rejected");
        return None;
    }

    detect_letter_grade(&normalized).or_else(|| detect_numeric_grade(&normalized))
}
