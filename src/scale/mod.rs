//! Grading-scale detection and normalization.
//!
//! Classifies free-form grade strings, proposes best/worst limits for the
//! scale a grade most likely comes from, keeps stored limits consistent with
//! the grade's percentage-ness, and checks whether a grade lies between two
//! limits regardless of which direction the scale runs.

pub mod bands;
pub mod classify;
pub mod detect;
pub mod letter;
pub mod normalize;
pub mod range;
pub mod types;
pub mod utility;

pub use bands::detect_numeric_grade;
pub use classify::get_grade_type;
pub use detect::detect_grading_scale;
pub use letter::{detect_letter_grade, get_letter_value};
pub use normalize::{normalize_limits_for_grade, refresh_limits};
pub use range::{is_grade_in_range, is_letter_in_range, is_numeric_in_range};
pub use types::{GradeRange, GradeType, GradingScaleBand};
pub use utility::{add_percentage, strip_percentage};
