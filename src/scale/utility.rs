use regex::Regex;
use tracing::warn;

/// Removes every `%` from a limit string and trims surrounding whitespace.
pub fn strip_percentage(value: &str) -> String {
    value.replace('%', "").trim().to_string()
}

/// Appends a single `%` to a limit string. Already-suffixed input is not
/// doubled.
pub fn add_percentage(value: &str) -> String {
    format!("{}%", strip_percentage(value))
}

/// Parses a grade or limit as a decimal, accepting a comma separator and a
/// trailing `%`. Returns `None` for anything that is not a finite number.
pub fn parse_decimal(value: &str) -> Option<f64> {
    strip_percentage(value)
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Formats a number the way a bare limit is displayed (`150`, not `150.0`).
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Compiles one of the static grade patterns. A pattern that fails to
/// compile is logged and treated as never matching.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(pattern, error = %e, "Failed to compile grade pattern");
            None
        }
    }
}

pub(crate) fn is_match(re: &Option<Regex>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}
