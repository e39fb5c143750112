//! Text for every [`Message`] variant.
//!
//! Keeping all wording in one match makes it easy to review the tone of the
//! whole CLI at once and guarantees a new variant cannot ship without text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WORKDAY MESSAGES ===
            Message::StartRegistered(start) => format!("Your start of the day registered as {}", start),
            Message::ShouldWorkUntil(end) => format!("Working until {} will make it a full (normal) working day", end),
            Message::StartTip => "TIP: next time you run moro the end of your day will be set".to_string(),
            Message::EndRegistered(end) => format!("Your end of the work day is set at: {}", end),
            Message::BreakRegistered(minutes) => {
                format!("Break took: {} minutes and will be removed from your work hours", minutes)
            }
            Message::NoteAdded => "Your note is added! You can see it in the report".to_string(),

            // === REPORT MESSAGES ===
            Message::TodayReportHeader => "Today looks like this so far:".to_string(),
            Message::FullReportHeader => "Full report:".to_string(),
            Message::ReportFooterHelp => "Run moro --help if you need to edit your start, end or break duration for today".to_string(),
            Message::ReportTotal(total, days) => format!("Total worked: {} over {} completed day(s)", total, days),
            Message::NoRecordForDate(date) => format!("Nothing registered for {} yet. Run moro to start your day", date),
            Message::NoRecords => "No days registered yet".to_string(),
            Message::DayInProgress => "in progress".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigWorkDaySet(hours) => format!("Duration of full work day is set to {}", hours),
            Message::ConfigBreakSet(minutes) => format!("Default break duration is set to {}", minutes),
            Message::ConfigDateFormatSet(format) => format!("Default date format pattern is set to {}", format),
            Message::ConfigDatabasePathSet(path) => format!("Default database path is set to {}", path),
            Message::ConfigWizardHeader => "Configure moro (press Enter to keep the current value)".to_string(),
            Message::PromptWorkDayHours => "Hours in a work day".to_string(),
            Message::PromptBreakDefault => "Default break duration (minutes)".to_string(),
            Message::PromptDateFormat => "Date format pattern".to_string(),
            Message::PromptDatabasePath => "Database path (empty for default)".to_string(),
            Message::InvalidWorkDayHours => "A work day is between 0 and 24 hours".to_string(),
            Message::InvalidBreakDefault(max) => format!("A break is at most {} minutes", max),

            // === CLEAR MESSAGES ===
            Message::ClearConfirmHint => "[BE CAREFUL] If you surely want to clear all data in moro run: moro clear --yes".to_string(),
            Message::DataCleared(count) => format!("All data cleared, {} day(s) removed", count),

            // === ABOUT ===
            Message::About { name, version, description } => format!("{} {}\n{}", name, version, description),

            // === MIGRATION MESSAGES ===
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === ERRORS ===
            Message::CommandFailed(error) => format!("{}", error),
        };

        write!(f, "{}", text)
    }
}
