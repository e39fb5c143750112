//! Configuration management for the moro application.
//!
//! The configuration is a small JSON document stored next to the default
//! database in the platform-specific application data directory. It is read
//! once per invocation and passed explicitly to everything that needs it.
//!
//! ## Recognized keys
//!
//! | Key                   | Field                   | Default      |
//! |-----------------------|-------------------------|--------------|
//! | `HOURS_IN_A_WORK_DAY` | `work_day_hours`        | `7.5`        |
//! | `BREAK_DEFAULT`       | `break_default_minutes` | `30`         |
//! | `DATE_FORMAT`         | `date_format`           | `%Y-%m-%d`   |
//! | `DB_FILE_MAIN`        | `db_file_main`          | `""`         |
//!
//! Missing keys fall back to their defaults. Unknown keys are kept in
//! [`Config::extra`] and written back untouched on save.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use moro::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.break_default_minutes = 45;
//! config.save()?;
//! # Ok::<(), moro::libs::error::AppError>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::{AppError, AppResult};
use crate::libs::formatter::validate_date_format;
use crate::libs::messages::Message;
use crate::libs::time_of_day::MINUTES_PER_DAY;
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database file name used when `DB_FILE_MAIN` is empty.
pub const DB_FILE_NAME: &str = "moro.db";

pub const DEFAULT_WORK_DAY_HOURS: f64 = 7.5;
pub const DEFAULT_BREAK_MINUTES: u32 = 30;
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound for `BREAK_DEFAULT`: a break cannot outlast the day.
pub const MAX_BREAK_MINUTES: u32 = MINUTES_PER_DAY;

/// Main configuration container.
///
/// Field names follow Rust conventions while the serialized keys keep the
/// upper-case names users already have in their `config.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Length of a full work day in hours, fractions allowed (7.5 = 7h 30m).
    #[serde(rename = "HOURS_IN_A_WORK_DAY", default = "default_work_day_hours")]
    pub work_day_hours: f64,

    /// Break minutes seeded into every new day and used for predictions.
    #[serde(rename = "BREAK_DEFAULT", default = "default_break_minutes")]
    pub break_default_minutes: u32,

    /// chrono `strftime` pattern used to render dates in reports.
    #[serde(rename = "DATE_FORMAT", default = "default_date_format")]
    pub date_format: String,

    /// Database path. Empty means the default location in the data directory.
    #[serde(rename = "DB_FILE_MAIN", default)]
    pub db_file_main: String,

    /// Keys this version does not know about, preserved on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_work_day_hours() -> f64 {
    DEFAULT_WORK_DAY_HOURS
}

fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            work_day_hours: DEFAULT_WORK_DAY_HOURS,
            break_default_minutes: DEFAULT_BREAK_MINUTES,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            db_file_main: String::new(),
            extra: Map::new(),
        }
    }
}

impl Config {
    /// Reads the configuration from the application data directory.
    ///
    /// A missing file is not an error: the defaults are returned so a fresh
    /// installation works without setup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConfigLoad`] if the file exists but cannot be read
    /// or parsed.
    pub fn read() -> AppResult<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit path.
    pub fn read_from(path: &Path) -> AppResult<Config> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to the application data directory.
    pub fn save(&self) -> AppResult<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes the configuration as pretty-printed JSON to an explicit path.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let config_file = File::create(path).map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Rejects values no arithmetic can make sense of.
    pub fn validate(&self) -> AppResult<()> {
        if !self.work_day_hours.is_finite() || self.work_day_hours < 0.0 || self.work_day_hours > 24.0 {
            return Err(AppError::Validation(format!(
                "work day length must be between 0 and 24 hours, got {}",
                self.work_day_hours
            )));
        }
        if self.break_default_minutes > MAX_BREAK_MINUTES {
            return Err(AppError::Validation(format!(
                "default break must be at most {} minutes, got {}",
                MAX_BREAK_MINUTES, self.break_default_minutes
            )));
        }
        validate_date_format(&self.date_format)
    }

    /// Work day length converted to whole minutes.
    pub fn work_day_minutes(&self) -> u32 {
        (self.work_day_hours * 60.0).round() as u32
    }

    /// Resolves the database file, falling back to the data directory.
    pub fn database_path(&self) -> AppResult<PathBuf> {
        if self.db_file_main.trim().is_empty() {
            DataStorage::new().get_path(DB_FILE_NAME)
        } else {
            Ok(PathBuf::from(self.db_file_main.trim()))
        }
    }

    /// Runs an interactive wizard pre-filled with the current values.
    pub fn init(&self) -> AppResult<Config> {
        let theme = ColorfulTheme::default();
        let prompt_err = |e: dialoguer::Error| AppError::Validation(e.to_string());

        msg_print!(Message::ConfigWizardHeader);
        let mut config = self.clone();

        config.work_day_hours = Input::with_theme(&theme)
            .with_prompt(Message::PromptWorkDayHours.to_string())
            .default(self.work_day_hours)
            .validate_with(|hours: &f64| -> Result<(), String> {
                if (0.0..=24.0).contains(hours) {
                    Ok(())
                } else {
                    Err(Message::InvalidWorkDayHours.to_string())
                }
            })
            .interact_text()
            .map_err(prompt_err)?;

        config.break_default_minutes = Input::with_theme(&theme)
            .with_prompt(Message::PromptBreakDefault.to_string())
            .default(self.break_default_minutes)
            .validate_with(|minutes: &u32| -> Result<(), String> {
                if *minutes <= MAX_BREAK_MINUTES {
                    Ok(())
                } else {
                    Err(Message::InvalidBreakDefault(MAX_BREAK_MINUTES).to_string())
                }
            })
            .interact_text()
            .map_err(prompt_err)?;

        config.date_format = Input::with_theme(&theme)
            .with_prompt(Message::PromptDateFormat.to_string())
            .default(self.date_format.clone())
            .validate_with(|pattern: &String| validate_date_format(pattern).map_err(|e| e.to_string()))
            .interact_text()
            .map_err(prompt_err)?;

        config.db_file_main = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(self.db_file_main.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        config.validate()?;
        Ok(config)
    }
}
