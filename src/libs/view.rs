//! Console tables for single-day and full reports.
//!
//! The `*_table` functions build a `prettytable::Table` without printing it
//! so callers (and tests) can inspect or render it themselves; `day` and
//! `report` print to stdout.

use crate::libs::config::Config;
use crate::libs::formatter::{format_break, format_date, format_work_minutes, EMPTY_FIELD};
use crate::libs::hours::{compute_work_hours, WorkHours};
use crate::libs::messages::Message;
use crate::libs::record::DailyRecord;
use crate::libs::time_of_day::TimeOfDay;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// One-row table describing a single day.
    ///
    /// `work_hours` is `None` while the day is in progress; the Worked cell
    /// then shows a placeholder instead of a duration.
    pub fn day_table(record: &DailyRecord, work_hours: Option<&WorkHours>, config: &Config) -> Table {
        let mut table = Self::table();
        Self::add_record(&mut table, record, work_hours, config);
        table
    }

    /// Table with one row per record, ordered by date.
    pub fn report_table(records: &[DailyRecord], config: &Config) -> Table {
        let mut sorted: Vec<&DailyRecord> = records.iter().collect();
        sorted.sort_by_key(|record| record.date);

        let mut table = Self::table();
        for record in sorted {
            let work_hours = compute_work_hours(Some(record));
            Self::add_record(&mut table, record, work_hours.as_ref(), config);
        }
        table
    }

    pub fn day(record: &DailyRecord, work_hours: Option<&WorkHours>, config: &Config) {
        msg_print!(Message::TodayReportHeader, true);
        Self::day_table(record, work_hours, config).printstd();
        msg_print!(Message::ReportFooterHelp, true);
    }

    pub fn report(records: &[DailyRecord], config: &Config) {
        if records.is_empty() {
            msg_print!(Message::NoRecords);
            return;
        }

        msg_print!(Message::FullReportHeader, true);
        Self::report_table(records, config).printstd();

        let (total, completed) = Self::total_minutes(records);
        msg_print!(Message::ReportTotal(format_work_minutes(total), completed), true);
    }

    /// Sum of net minutes over completed days, and how many days that is.
    pub fn total_minutes(records: &[DailyRecord]) -> (u32, usize) {
        records
            .iter()
            .filter_map(|record| compute_work_hours(Some(record)))
            .fold((0, 0), |(total, days), hours| (total + hours.minutes, days + 1))
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_titles(row!["DATE", "START", "END", "BREAK", "WORKED", "NOTES"]);
        table
    }

    fn add_record(table: &mut Table, record: &DailyRecord, work_hours: Option<&WorkHours>, config: &Config) {
        let worked = work_hours.map_or_else(|| Message::DayInProgress.to_string(), |hours| hours.formatted.clone());
        let notes = record
            .notes
            .iter()
            .map(|note| format!("[{}] {}", note.created_at, note.text))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(row![
            format_date(record.date, &config.date_format),
            Self::time_cell(record.start),
            Self::time_cell(record.end),
            format_break(record.break_minutes),
            worked,
            notes
        ]);
    }

    fn time_cell(time: Option<TimeOfDay>) -> String {
        time.map_or_else(|| EMPTY_FIELD.to_string(), |t| t.to_string())
    }
}
