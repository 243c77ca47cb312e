//! CSV parser for applicant grade batches.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::scale::GradeRange;

/// One applicant row from a batch file.
///
/// Columns: `applicant_id,grade,upper_limit,lower_limit,manually_set`. The
/// limits and the flag may be left empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradeEntry {
    pub applicant_id: String,
    pub grade: String,
    #[serde(default)]
    pub upper_limit: Option<String>,
    #[serde(default)]
    pub lower_limit: Option<String>,
    #[serde(default)]
    pub manually_set: Option<bool>,
}

impl GradeEntry {
    /// The stored limits, if both are present.
    pub fn stored_limits(&self) -> Option<GradeRange> {
        match (&self.upper_limit, &self.lower_limit) {
            (Some(upper), Some(lower)) if !upper.is_empty() && !lower.is_empty() => {
                Some(GradeRange::new(upper.as_str(), lower.as_str()))
            }
            _ => None,
        }
    }

    pub fn is_manually_set(&self) -> bool {
        self.manually_set.unwrap_or(false)
    }
}

/// A batch row as decoded. The applicant id is kept apart from the entry so a
/// row that fails to decode can still be attributed.
#[derive(Debug)]
pub struct ParsedRow {
    pub applicant_id: Option<String>,
    pub entry: Result<GradeEntry>,
}

/// Decodes a CSV batch. Each row is parsed on its own so one bad row does not
/// hide the rest.
///
/// # Errors
///
/// Returns an error if the header row cannot be read.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<ParsedRow>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(bytes);
    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let id_column = headers.iter().position(|h| h == "applicant_id");

    let rows = reader
        .records()
        .enumerate()
        .map(|(i, row)| match row {
            Ok(raw) => ParsedRow {
                applicant_id: id_column
                    .and_then(|c| raw.get(c))
                    .filter(|id| !id.is_empty())
                    .map(str::to_string),
                entry: raw
                    .deserialize::<GradeEntry>(Some(&headers))
                    .with_context(|| format!("Invalid row {}", i + 1)),
            },
            Err(e) => ParsedRow {
                applicant_id: None,
                entry: Err(e).with_context(|| format!("Unreadable row {}", i + 1)),
            },
        })
        .collect();

    Ok(rows)
}
