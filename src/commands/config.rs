//! Configuration command.
//!
//! With flags, only the given keys change. Without any flag an interactive
//! wizard walks through every setting with the current values pre-filled.

use crate::libs::config::Config;
use crate::libs::formatter::validate_date_format;
use crate::libs::messages::Message;
use crate::libs::record::validate_break_minutes;
use crate::msg_success;
use anyhow::{Context as _, Result};
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct ConfigArgs {
    /// Hours in a full work day, e.g. 7.5
    #[arg(short, long)]
    pub day: Option<f64>,

    /// Default break duration in minutes
    #[arg(short, long = "break", allow_negative_numbers = true)]
    pub break_minutes: Option<i64>,

    /// Date format pattern used in reports, e.g. %d.%m.%Y
    #[arg(short, long)]
    pub format: Option<String>,

    /// Database file path; an empty value restores the default location
    #[arg(long = "database-path", alias = "databasePath")]
    pub database_path: Option<String>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.day.is_none() && self.break_minutes.is_none() && self.format.is_none() && self.database_path.is_none()
    }
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let config = Config::read().context("Could not load the configuration")?;

    let config = if args.is_empty() { config.init()? } else { apply(config, &args)? };

    config.save().context("Could not save the configuration")?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}

/// Applies the given flags onto `config`, reporting each change.
pub fn apply(mut config: Config, args: &ConfigArgs) -> Result<Config> {
    if let Some(day) = args.day {
        config.work_day_hours = day;
        config.validate()?;
        msg_success!(Message::ConfigWorkDaySet(day));
    }

    if let Some(minutes) = args.break_minutes {
        config.break_default_minutes = validate_break_minutes(minutes)?;
        config.validate()?;
        msg_success!(Message::ConfigBreakSet(config.break_default_minutes));
    }

    if let Some(format) = &args.format {
        validate_date_format(format)?;
        config.date_format = format.clone();
        msg_success!(Message::ConfigDateFormatSet(format.clone()));
    }

    if let Some(path) = &args.database_path {
        config.db_file_main = path.trim().to_string();
        let shown = if config.db_file_main.is_empty() { "default".to_string() } else { config.db_file_main.clone() };
        msg_success!(Message::ConfigDatabasePathSet(shown));
    }

    Ok(config)
}
