//! Daily records and the merge of partial updates.
//!
//! A [`DailyRecord`] is the single canonical entry for one calendar date.
//! Every CLI action produces an [`Update`] carrying the date and exactly one
//! [`Action`]; [`merge`] applies it onto the stored record (or a fresh one)
//! touching only the fields that action owns. Persisting the result is the
//! caller's job.
//!
//! ## Field ownership
//!
//! | Action             | Writes          |
//! |--------------------|-----------------|
//! | `SetStart`         | `start`         |
//! | `SetEnd`           | `end`           |
//! | `SetBreakDuration` | `break_minutes` |
//! | `AddNote`          | appends a note  |
//!
//! Notes are an ordered log: adding a note never replaces earlier ones.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use moro::libs::config::Config;
//! use moro::libs::record::{merge, Update};
//! use moro::libs::time_of_day::TimeOfDay;
//!
//! let config = Config::default();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let record = merge(None, &Update::set_start(date, TimeOfDay::parse("09:00")?), &config);
//! let record = merge(Some(record), &Update::set_break(date, 45), &config);
//! assert_eq!(record.break_minutes, 45);
//! # Ok::<(), moro::libs::error::AppError>(())
//! ```

use crate::libs::config::Config;
use crate::libs::error::{AppError, AppResult};
use crate::libs::time_of_day::TimeOfDay;
use chrono::NaiveDate;

/// A free-text note attached to a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub created_at: TimeOfDay,
    pub text: String,
}

/// Canonical per-date entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub break_minutes: u32,
    pub notes: Vec<Note>,
}

impl DailyRecord {
    /// Creates an empty record for `date` with the configured default break.
    pub fn new(date: NaiveDate, config: &Config) -> Self {
        Self {
            date,
            start: None,
            end: None,
            break_minutes: config.break_default_minutes,
            notes: Vec::new(),
        }
    }

    /// When the most recent note was added.
    pub fn created_at(&self) -> Option<TimeOfDay> {
        self.notes.last().map(|note| note.created_at)
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// The single field change an update carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetStart(TimeOfDay),
    SetEnd(TimeOfDay),
    SetBreakDuration(u32),
    AddNote { text: String, created_at: TimeOfDay },
}

/// A partial update addressed to one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub date: NaiveDate,
    pub action: Action,
}

impl Update {
    pub fn set_start(date: NaiveDate, start: TimeOfDay) -> Self {
        Self { date, action: Action::SetStart(start) }
    }

    pub fn set_end(date: NaiveDate, end: TimeOfDay) -> Self {
        Self { date, action: Action::SetEnd(end) }
    }

    pub fn set_break(date: NaiveDate, minutes: u32) -> Self {
        Self {
            date,
            action: Action::SetBreakDuration(minutes),
        }
    }

    pub fn add_note(date: NaiveDate, text: impl Into<String>, created_at: TimeOfDay) -> Self {
        Self {
            date,
            action: Action::AddNote { text: text.into(), created_at },
        }
    }
}

/// Applies `update` onto `existing`, creating the record if there is none.
///
/// `existing` is expected to belong to `update.date`; the date of a record
/// never changes once created.
pub fn merge(existing: Option<DailyRecord>, update: &Update, config: &Config) -> DailyRecord {
    let mut record = existing.unwrap_or_else(|| DailyRecord::new(update.date, config));
    debug_assert_eq!(record.date, update.date);

    match &update.action {
        Action::SetStart(start) => record.start = Some(*start),
        Action::SetEnd(end) => record.end = Some(*end),
        Action::SetBreakDuration(minutes) => record.break_minutes = *minutes,
        Action::AddNote { text, created_at } => record.notes.push(Note {
            created_at: *created_at,
            text: text.clone(),
        }),
    }

    tracing::debug!(date = %record.date, action = ?update.action, "record merged");
    record
}

/// Checks a user supplied break length.
pub fn validate_break_minutes(minutes: i64) -> AppResult<u32> {
    u32::try_from(minutes).map_err(|_| AppError::Validation(format!("break duration must be a non-negative number of minutes, got {}", minutes)))
}
