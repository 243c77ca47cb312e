//! Numeric grading-scale bands.

use tracing::debug;

use crate::scale::types::{GradeRange, GradingScaleBand};
use crate::scale::utility::{add_percentage, format_number, parse_decimal};

/// Known numeric scales, ascending by `max_value`. The first matching band
/// wins, so order and the `inclusive` flags are both significant.
///
/// | Band     | Convention           | Best | Worst |
/// |----------|----------------------|------|-------|
/// | <= 4     | German               | 1.0  | 4.0   |
/// | <= 6     | Swiss                | 6.0  | 4.0   |
/// | <= 10    | Spanish              | 10   | 5     |
/// | <= 20    | French               | 20   | 10    |
/// | < 40     | 20-40                | 40   | 20    |
/// | < 50     | 40-50                | 50   | 40    |
/// | <= 100   | Percentage           | 100  | 50    |
/// | <= 110   | Italian              | 110  | 66    |
pub static GRADING_SCALE_BANDS: &[GradingScaleBand] = &[
    GradingScaleBand {
        max_value: 4.0,
        upper_limit: "1.0",
        lower_limit: "4.0",
        inclusive: true,
    },
    GradingScaleBand {
        max_value: 6.0,
        upper_limit: "6.0",
        lower_limit: "4.0",
        inclusive: true,
    },
    GradingScaleBand {
        max_value: 10.0,
        upper_limit: "10",
        lower_limit: "5",
        inclusive: true,
    },
    GradingScaleBand {
        max_value: 20.0,
        upper_limit: "20",
        lower_limit: "10",
        inclusive: true,
    },
    GradingScaleBand {
        max_value: 40.0,
        upper_limit: "40",
        lower_limit: "20",
        inclusive: false,
    },
    GradingScaleBand {
        max_value: 50.0,
        upper_limit: "50",
        lower_limit: "40",
        inclusive: false,
    },
    GradingScaleBand {
        max_value: 100.0,
        upper_limit: "100",
        lower_limit: "50",
        inclusive: true,
    },
    GradingScaleBand {
        max_value: 110.0,
        upper_limit: "110",
        lower_limit: "66",
        inclusive: true,
    },
];

/// Proposes limits for a numeric or percentage grade. Expects upper-cased,
/// trimmed input.
///
/// Values below 1 or that do not parse yield `None`. Values above every band
/// get the value itself as best grade and half of it, rounded, as worst.
/// Percentage input gets percentage limits. Only a trailing `%` is accepted.
pub fn detect_numeric_grade(grade: &str) -> Option<GradeRange> {
    let (bare, is_percentage) = match grade.strip_suffix('%') {
        Some(bare) => (bare, true),
        None => (grade, false),
    };
    if bare.contains('%') {
        return None;
    }
    let value = parse_decimal(bare)?;
    if value < 1.0 {
        return None;
    }

    let (upper, lower) = match GRADING_SCALE_BANDS.iter().find(|band| band.matches(value)) {
        Some(band) => {
            debug!(value, max_value = band.max_value, "Grade matched scale band");
            (band.upper_limit.to_string(), band.lower_limit.to_string())
        }
        None => {
            debug!(value, "Grade above all scale bands, using fallback");
            (format_number(value), format_number((value / 2.0).round()))
        }
    };

    let range = if is_percentage {
        GradeRange::new(add_percentage(&upper), add_percentage(&lower)).with_percentage(true)
    } else {
        GradeRange::new(upper, lower)
    };
    Some(range)
}
