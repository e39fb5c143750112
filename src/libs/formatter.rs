//! Formatting helpers shared by the engine and the reporter.
//!
//! Worked time is shown as `<H>h <M>m` without zero padding (`7h 30m`,
//! `0h 5m`). Dates use the pattern configured in `DATE_FORMAT`.
//!
//! ## Examples
//!
//! ```rust
//! use moro::libs::formatter::format_work_minutes;
//!
//! assert_eq!(format_work_minutes(450), "7h 30m");
//! assert_eq!(format_work_minutes(0), "0h 0m");
//! ```

use crate::libs::error::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

/// Placeholder rendered for fields that have not been registered yet.
pub const EMPTY_FIELD: &str = "-";

const ISO_DATE: &str = "%Y-%m-%d";

/// Renders a number of minutes as `<H>h <M>m`.
pub fn format_work_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Renders a date with a user supplied chrono pattern.
///
/// Patterns chrono cannot apply to a plain date (`%H`, `%z`, unknown
/// specifiers) render the ISO form instead.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    try_format_date(date, pattern).unwrap_or_else(|| date.format(ISO_DATE).to_string())
}

/// Checks that `pattern` can render a calendar date.
pub fn validate_date_format(pattern: &str) -> AppResult<()> {
    match NaiveDate::from_ymd_opt(2000, 1, 1).and_then(|sample| try_format_date(sample, pattern)) {
        Some(_) => Ok(()),
        None => Err(AppError::Validation(format!(
            "'{}' is not a usable date format pattern, e.g. %d.%m.%Y",
            pattern
        ))),
    }
}

fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    if pattern.trim().is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut rendered = String::new();
    write!(rendered, "{}", date.format(pattern)).ok()?;
    Some(rendered)
}

/// Renders a break length in minutes.
pub fn format_break(minutes: u32) -> String {
    format!("{} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_without_padding() {
        assert_eq!(format_work_minutes(450), "7h 30m");
        assert_eq!(format_work_minutes(5), "0h 5m");
        assert_eq!(format_work_minutes(600), "10h 0m");
    }

    #[test]
    fn formats_dates_with_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d"), "2024-03-01");
        assert_eq!(format_date(date, "%d.%m.%Y"), "01.03.2024");
    }

    #[test]
    fn falls_back_on_invalid_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date, "%Q"), "2024-03-01");
        assert_eq!(format_date(date, ""), "2024-03-01");
    }

    #[test]
    fn falls_back_on_time_specifiers() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d %H:%M"), "2024-03-01");
        assert_eq!(format_date(date, "%d.%m.%Y %z"), "2024-03-01");
    }

    #[test]
    fn validates_date_patterns() {
        assert!(validate_date_format("%d.%m.%Y").is_ok());
        assert!(validate_date_format("%A, %B %e").is_ok());
        assert!(matches!(validate_date_format("%Y-%m-%d %H:%M"), Err(AppError::Validation(_))));
        assert!(matches!(validate_date_format("%Q"), Err(AppError::Validation(_))));
        assert!(matches!(validate_date_format("  "), Err(AppError::Validation(_))));
    }
}
