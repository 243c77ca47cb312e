use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::parser::{GradeEntry, parse_entries};
use crate::scale::{GradeType, get_grade_type, is_grade_in_range, refresh_limits};

/// Evaluation of one applicant's grade against its effective limits.
#[derive(Debug, Default, Serialize)]
pub struct GradeRecord {
    pub timestamp: DateTime<Utc>,
    pub applicant_id: Option<String>,
    pub grade: String,
    pub grade_type: Option<GradeType>,

    // effective limits
    pub upper_limit: Option<String>,
    pub lower_limit: Option<String>,
    pub is_percentage: bool,
    pub manually_set: bool,
    pub in_range: bool,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl GradeRecord {
    pub fn from_entry(entry: &GradeEntry) -> Self {
        let manually_set = entry.is_manually_set();
        let stored = entry.stored_limits();
        let limits = refresh_limits(&entry.grade, stored.as_ref(), manually_set);

        let mut r = GradeRecord {
            timestamp: Utc::now(),
            applicant_id: Some(entry.applicant_id.clone()),
            grade: entry.grade.clone(),
            grade_type: Some(get_grade_type(&entry.grade)),
            manually_set,
            ..Default::default()
        };

        if let Some(limits) = limits {
            r.in_range = is_grade_in_range(&entry.grade, &limits);
            r.is_percentage = limits.is_percentage;
            r.upper_limit = Some(limits.upper_limit);
            r.lower_limit = Some(limits.lower_limit);
        }

        r
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error_type: &str, error_message: &str) -> Self {
        GradeRecord {
            timestamp: Utc::now(),
            error_type: Some(error_type.to_string()),
            error_message: Some(error_message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_applicant_info(mut self, applicant_id: &str) -> Self {
        self.applicant_id = Some(applicant_id.to_string());
        self
    }

    pub fn has_limits(&self) -> bool {
        self.upper_limit.is_some() && self.lower_limit.is_some()
    }
}

/// Evaluates every row of a CSV batch. Rows that fail to decode become error
/// records.
///
/// # Errors
///
/// Returns an error only if the batch header cannot be read.
pub fn evaluate_batch(bytes: &[u8]) -> anyhow::Result<Vec<GradeRecord>> {
    let records = parse_entries(bytes)?
        .into_iter()
        .map(|row| match row.entry {
            Ok(entry) => {
                let record = GradeRecord::from_entry(&entry);
                debug!(
                    applicant_id = %entry.applicant_id,
                    grade_type = ?record.grade_type,
                    in_range = record.in_range,
                    "Grade evaluated"
                );
                record
            }
            Err(e) => {
                warn!(
                    applicant_id = ?row.applicant_id,
                    error = %e,
                    "Skipping unreadable grade row"
                );
                let record = GradeRecord::from_error("parse_error", &format!("{e:#}"));
                match row.applicant_id.as_deref() {
                    Some(id) => record.with_applicant_info(id),
                    None => record,
                }
            }
        })
        .collect();

    Ok(records)
}
