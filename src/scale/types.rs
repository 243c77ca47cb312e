//! Value types shared by the grading-scale functions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a raw grade string, as decided by [`get_grade_type`](super::get_grade_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeType {
    Letter,
    Numeric,
    Percentage,
    Invalid,
}

impl fmt::Display for GradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GradeType::Letter => "letter",
            GradeType::Numeric => "numeric",
            GradeType::Percentage => "percentage",
            GradeType::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

/// Best (`upper_limit`) and worst (`lower_limit`) grade of a scale.
///
/// The pair is directional, not sorted: on a German scale the upper limit is
/// `"1.0"` and the lower limit `"4.0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRange {
    pub upper_limit: String,
    pub lower_limit: String,
    #[serde(default)]
    pub is_percentage: bool,
}

impl GradeRange {
    pub fn new(upper_limit: impl Into<String>, lower_limit: impl Into<String>) -> Self {
        GradeRange {
            upper_limit: upper_limit.into(),
            lower_limit: lower_limit.into(),
            is_percentage: false,
        }
    }

    /// Marks the range as percentage-formatted without touching the limits.
    pub fn with_percentage(mut self, is_percentage: bool) -> Self {
        self.is_percentage = is_percentage;
        self
    }
}

/// One row of the static numeric band table.
///
/// A value matches when it is below `max_value` (or equal to it, if
/// `inclusive`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingScaleBand {
    pub max_value: f64,
    pub upper_limit: &'static str,
    pub lower_limit: &'static str,
    pub inclusive: bool,
}

impl GradingScaleBand {
    pub fn matches(&self, value: f64) -> bool {
        if self.inclusive {
            value <= self.max_value
        } else {
            value < self.max_value
        }
    }
}
