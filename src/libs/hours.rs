//! Worked-hours computation and end-of-day prediction.
//!
//! Both functions are pure. [`compute_work_hours`] answers "how long did I
//! work on this day" and returns `None` while the day is still in progress.
//! [`predict_end_time`] is advisory only and its result is never stored.
//!
//! ## Rules
//!
//! - raw minutes are `end - start` on a single-day clock, no wraparound
//! - a negative raw duration (end before start) counts as zero
//! - net minutes are `raw - break`, floored at zero
//! - the predicted end is `start + work day + default break`, modulo 24h

use crate::libs::config::Config;
use crate::libs::formatter::format_work_minutes;
use crate::libs::record::DailyRecord;
use crate::libs::time_of_day::{TimeOfDay, MINUTES_PER_DAY};

/// Net worked time of a completed day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkHours {
    pub minutes: u32,
    pub formatted: String,
}

impl WorkHours {
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes,
            formatted: format_work_minutes(minutes),
        }
    }
}

/// Computes net worked time, or `None` if start or end is not registered yet.
pub fn compute_work_hours(record: Option<&DailyRecord>) -> Option<WorkHours> {
    let record = record?;
    let (start, end) = (record.start?, record.end?);

    let raw = end.minutes_since(start).max(0);
    let net = (raw - i64::from(record.break_minutes)).max(0);
    if raw == 0 && start != end {
        tracing::debug!(date = %record.date, %start, %end, "end precedes start, counting zero minutes");
    }

    Some(WorkHours::from_minutes(net as u32))
}

/// Time of day the work day should end given its start.
pub fn predict_end_time(start: TimeOfDay, config: &Config) -> TimeOfDay {
    let offset = config.work_day_minutes() % MINUTES_PER_DAY + config.break_default_minutes % MINUTES_PER_DAY;
    start.add_minutes(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(start: Option<&str>, end: Option<&str>, break_minutes: u32) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            start: start.map(|s| TimeOfDay::parse(s).unwrap()),
            end: end.map(|s| TimeOfDay::parse(s).unwrap()),
            break_minutes,
            notes: Vec::new(),
        }
    }

    #[test]
    fn computes_net_minutes() {
        let day = record(Some("09:00"), Some("17:00"), 30);
        let hours = compute_work_hours(Some(&day)).unwrap();
        assert_eq!(hours.minutes, 450);
        assert_eq!(hours.formatted, "7h 30m");
    }

    #[test]
    fn missing_end_is_in_progress() {
        assert_eq!(compute_work_hours(Some(&record(Some("09:00"), None, 30))), None);
        assert_eq!(compute_work_hours(Some(&record(None, Some("17:00"), 30))), None);
        assert_eq!(compute_work_hours(None), None);
    }

    #[test]
    fn end_before_start_clamps_to_zero() {
        let day = record(Some("18:00"), Some("09:00"), 0);
        let hours = compute_work_hours(Some(&day)).unwrap();
        assert_eq!(hours.minutes, 0);
        assert_eq!(hours.formatted, "0h 0m");
    }

    #[test]
    fn break_longer_than_day_clamps_to_zero() {
        let day = record(Some("09:00"), Some("09:20"), 30);
        assert_eq!(compute_work_hours(Some(&day)).unwrap().formatted, "0h 0m");
    }

    #[test]
    fn predicts_end_time() {
        let config = Config {
            work_day_hours: 8.0,
            break_default_minutes: 30,
            ..Config::default()
        };
        let start = TimeOfDay::parse("09:00").unwrap();
        assert_eq!(predict_end_time(start, &config).to_string(), "17:30");
    }

    #[test]
    fn predicts_fractional_work_day() {
        let config = Config {
            work_day_hours: 7.5,
            break_default_minutes: 30,
            ..Config::default()
        };
        let start = TimeOfDay::parse("08:45").unwrap();
        assert_eq!(predict_end_time(start, &config).to_string(), "16:45");
    }

    #[test]
    fn prediction_wraps_past_midnight() {
        let config = Config {
            work_day_hours: 8.0,
            break_default_minutes: 60,
            ..Config::default()
        };
        let start = TimeOfDay::parse("20:00").unwrap();
        assert_eq!(predict_end_time(start, &config).to_string(), "05:00");
    }

    #[test]
    fn prediction_survives_huge_break() {
        let config = Config {
            work_day_hours: 8.0,
            break_default_minutes: u32::MAX,
            ..Config::default()
        };
        let start = TimeOfDay::parse("09:00").unwrap();
        // u32::MAX % 1440 == 255, so 09:00 + 8h + 4h15m
        assert_eq!(predict_end_time(start, &config).to_string(), "21:15");
    }

    #[test]
    fn extra_half_hour_counts_toward_net() {
        let day = record(Some("09:00"), Some("17:30"), 30);
        assert_eq!(compute_work_hours(Some(&day)).unwrap().formatted, "8h 0m");
    }
}
