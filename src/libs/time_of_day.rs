//! Validated time-of-day value type.
//!
//! Every clock value the engine touches (start, end, note timestamps, the
//! predicted end of the day) is a [`TimeOfDay`]: a number of minutes since
//! midnight in the range `0..=1439`. Values can only be built through
//! [`TimeOfDay::parse`], [`TimeOfDay::from_minutes`] or from a
//! `chrono::NaiveTime`, so arithmetic never sees a malformed string.
//!
//! ## Accepted input
//!
//! - `9:05`, `09:05`, ` 17:30 ` (surrounding whitespace is ignored)
//! - hours `0..=23`, minutes always two digits `00..=59`
//!
//! Anything else fails with [`AppError::Validation`].
//!
//! ## Examples
//!
//! ```rust
//! use moro::libs::time_of_day::TimeOfDay;
//!
//! let start = TimeOfDay::parse("09:00")?;
//! assert_eq!(start.minutes(), 540);
//! assert_eq!(start.to_string(), "09:00");
//! # Ok::<(), moro::libs::error::AppError>(())
//! ```

use crate::libs::error::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Number of minutes in a day; all clock arithmetic wraps at this value.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Parses an `HH:mm` string.
    pub fn parse(input: &str) -> AppResult<Self> {
        let invalid = || AppError::Validation(format!("'{}' is not a valid time, expected HH:mm", input.trim()));

        let (hours, minutes) = input.trim().split_once(':').ok_or_else(invalid)?;
        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return Err(invalid());
        }
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hours: u32 = hours.parse().map_err(|_| invalid())?;
        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        Ok(Self((hours * 60 + minutes) as u16))
    }

    /// Builds a time from minutes since midnight, wrapping around a 24-hour clock.
    pub fn from_minutes(minutes: u32) -> Self {
        Self((minutes % MINUTES_PER_DAY) as u16)
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Signed distance in minutes from `earlier` to `self` on the same day.
    pub fn minutes_since(self, earlier: TimeOfDay) -> i64 {
        i64::from(self.minutes()) - i64::from(earlier.minutes())
    }

    /// Moves the time forward, wrapping past midnight.
    pub fn add_minutes(self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes() + minutes % MINUTES_PER_DAY)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
