//! Daily record persistence.
//!
//! The store is keyed by calendar date: `days` holds one row per date and
//! `notes` the ordered note log of each date. Writes are upserts by date and
//! replace the note log of that date in the same transaction, so the stored
//! state always mirrors the merged [`DailyRecord`] handed in.
//!
//! ## Operations
//!
//! - [`Records::fetch`]: read one date
//! - [`Records::upsert`]: write or replace one date
//! - [`Records::fetch_all`]: every date, ascending
//! - [`Records::clear`]: wipe everything
//!
//! ```rust
//! use chrono::NaiveDate;
//! use moro::db::records::Records;
//! use moro::libs::{config::Config, record::{merge, Update}, time_of_day::TimeOfDay};
//!
//! let config = Config::default();
//! let mut records = Records::open_in_memory()?;
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! let record = merge(records.fetch(date)?, &Update::set_start(date, TimeOfDay::parse("09:00")?), &config);
//! records.upsert(&record)?;
//! assert_eq!(records.fetch(date)?, Some(record));
//! # Ok::<(), moro::libs::error::AppError>(())
//! ```

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::error::{AppError, AppResult};
use crate::libs::record::{DailyRecord, Note};
use crate::libs::time_of_day::TimeOfDay;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Type, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use std::collections::HashMap;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

const UPSERT_DAY: &str = "INSERT INTO days (date, start, \"end\", break_duration) VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(date) DO UPDATE SET start = excluded.start, \"end\" = excluded.\"end\", break_duration = excluded.break_duration";
const DELETE_NOTES_BY_DATE: &str = "DELETE FROM notes WHERE date = ?1";
const INSERT_NOTE: &str = "INSERT INTO notes (date, created_at, body) VALUES (?1, ?2, ?3)";
const SELECT_BY_DATE: &str = "SELECT date, start, \"end\", break_duration FROM days WHERE date = ?1";
const SELECT_ALL: &str = "SELECT date, start, \"end\", break_duration FROM days ORDER BY date ASC";
const SELECT_NOTES_BY_DATE: &str = "SELECT date, created_at, body FROM notes WHERE date = ?1 ORDER BY id ASC";
const SELECT_ALL_NOTES: &str = "SELECT date, created_at, body FROM notes ORDER BY id ASC";
const COUNT_DAYS: &str = "SELECT COUNT(*) FROM days";

impl ToSql for TimeOfDay {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for TimeOfDay {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        TimeOfDay::parse(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

pub struct Records {
    conn: Connection,
}

impl Records {
    /// Opens the store configured for this user.
    pub fn new(config: &Config) -> AppResult<Self> {
        let db = Db::new(config)?;
        Ok(Records { conn: db.conn })
    }

    pub fn open(path: &Path) -> AppResult<Self> {
        let db = Db::open(path)?;
        Ok(Records { conn: db.conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let db = Db::open_in_memory()?;
        Ok(Records { conn: db.conn })
    }

    pub fn fetch(&self, date: NaiveDate) -> AppResult<Option<DailyRecord>> {
        let date_str = date.format(DATE_FORMAT).to_string();

        let record = self
            .conn
            .query_row(SELECT_BY_DATE, [&date_str], Self::record_from_row)
            .optional()
            .map_err(AppError::StoreRead)?;

        let Some(mut record) = record else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(SELECT_NOTES_BY_DATE).map_err(AppError::StoreRead)?;
        record.notes = stmt
            .query_map([&date_str], Self::note_from_row)
            .and_then(|rows| rows.map(|row| row.map(|(_, note)| note)).collect::<rusqlite::Result<Vec<Note>>>())
            .map_err(AppError::StoreRead)?;

        Ok(Some(record))
    }

    /// Writes `record`, replacing whatever was stored for its date.
    pub fn upsert(&mut self, record: &DailyRecord) -> AppResult<()> {
        let date_str = record.date.format(DATE_FORMAT).to_string();

        let tx = self.conn.transaction().map_err(AppError::StoreWrite)?;
        tx.execute(UPSERT_DAY, params![date_str, record.start, record.end, record.break_minutes])
            .map_err(AppError::StoreWrite)?;
        tx.execute(DELETE_NOTES_BY_DATE, [&date_str]).map_err(AppError::StoreWrite)?;
        for note in &record.notes {
            tx.execute(INSERT_NOTE, params![date_str, note.created_at, note.text])
                .map_err(AppError::StoreWrite)?;
        }
        tx.commit().map_err(AppError::StoreWrite)?;

        tracing::debug!(date = %date_str, notes = record.notes.len(), "record upserted");
        Ok(())
    }

    /// Every stored record in ascending date order.
    pub fn fetch_all(&self) -> AppResult<Vec<DailyRecord>> {
        let mut notes: HashMap<NaiveDate, Vec<Note>> = HashMap::new();
        {
            let mut stmt = self.conn.prepare(SELECT_ALL_NOTES).map_err(AppError::StoreRead)?;
            let rows = stmt.query_map([], Self::note_from_row).map_err(AppError::StoreRead)?;
            for row in rows {
                let (date, note) = row.map_err(AppError::StoreRead)?;
                notes.entry(date).or_default().push(note);
            }
        }

        let mut stmt = self.conn.prepare(SELECT_ALL).map_err(AppError::StoreRead)?;
        let rows = stmt.query_map([], Self::record_from_row).map_err(AppError::StoreRead)?;

        let mut records = Vec::new();
        for row in rows {
            let mut record = row.map_err(AppError::StoreRead)?;
            record.notes = notes.remove(&record.date).unwrap_or_default();
            records.push(record);
        }
        Ok(records)
    }

    /// Deletes every record and note. Returns how many days were removed.
    pub fn clear(&mut self) -> AppResult<usize> {
        let tx = self.conn.transaction().map_err(AppError::StoreWrite)?;
        let count: usize = tx.query_row(COUNT_DAYS, [], |row| row.get(0)).map_err(AppError::StoreRead)?;
        tx.execute("DELETE FROM notes", []).map_err(AppError::StoreWrite)?;
        tx.execute("DELETE FROM days", []).map_err(AppError::StoreWrite)?;
        tx.commit().map_err(AppError::StoreWrite)?;

        tracing::debug!(count, "all records cleared");
        Ok(count)
    }

    fn parse_date(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
        let text: String = row.get(idx)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }

    fn record_from_row(row: &Row) -> rusqlite::Result<DailyRecord> {
        Ok(DailyRecord {
            date: Self::parse_date(row, 0)?,
            start: row.get(1)?,
            end: row.get(2)?,
            break_minutes: row.get(3)?,
            notes: Vec::new(),
        })
    }

    fn note_from_row(row: &Row) -> rusqlite::Result<(NaiveDate, Note)> {
        Ok((
            Self::parse_date(row, 0)?,
            Note {
                created_at: row.get(1)?,
                text: row.get(2)?,
            },
        ))
    }
}
