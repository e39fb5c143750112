/// Every user-facing message of the application.
///
/// Text lives in [`display`](super::display); call sites only pick a variant
/// and pass the values to interpolate.
#[derive(Debug, Clone)]
pub enum Message {
    // === WORKDAY MESSAGES ===
    StartRegistered(String),  // start time
    ShouldWorkUntil(String),  // predicted end
    StartTip,
    EndRegistered(String),    // end time
    BreakRegistered(u32),     // minutes
    NoteAdded,

    // === REPORT MESSAGES ===
    TodayReportHeader,
    FullReportHeader,
    ReportFooterHelp,
    ReportTotal(String, usize), // formatted total, completed days
    NoRecordForDate(String),    // date
    NoRecords,
    DayInProgress,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigWorkDaySet(f64),
    ConfigBreakSet(u32),
    ConfigDateFormatSet(String),
    ConfigDatabasePathSet(String),
    ConfigWizardHeader,
    PromptWorkDayHours,
    PromptBreakDefault,
    PromptDateFormat,
    PromptDatabasePath,
    InvalidWorkDayHours,
    InvalidBreakDefault(u32), // max minutes

    // === CLEAR MESSAGES ===
    ClearConfirmHint,
    DataCleared(usize), // removed days

    // === ABOUT ===
    About { name: String, version: String, description: String },

    // === MIGRATION MESSAGES ===
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error

    // === ERRORS ===
    CommandFailed(String),
}
