//! Command-line interface of moro.
//!
//! Each subcommand lives in its own module with an `*Args` struct and a
//! `cmd` function. Commands receive a [`Context`] holding the configuration,
//! the open record store and the clock values for this invocation, so they
//! can be driven from tests with a temporary database and a fixed date.
//!
//! Running `moro` without a subcommand performs the next undone action for
//! today: start the day, then end it, then show the report.

pub mod about;
pub mod breaks;
pub mod clear;
pub mod config;
pub mod end;
pub mod next;
pub mod note;
pub mod report;
pub mod start;

use crate::db::records::Records;
use crate::libs::config::Config;
use crate::libs::record::{merge, DailyRecord, Update};
use crate::libs::time_of_day::TimeOfDay;
use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Register the start of your work day (defaults to now)")]
    Start(start::StartArgs),
    #[command(about = "Register the end of your work day (defaults to now)")]
    End(end::EndArgs),
    #[command(about = "Set the total break duration of today")]
    Break(breaks::BreakArgs),
    #[command(about = "Add a note to today")]
    Note(note::NoteArgs),
    #[command(about = "Show today's report, or every day with --all")]
    Report(report::ReportArgs),
    #[command(about = "Change the configuration (interactive without flags)")]
    Config(config::ConfigArgs),
    #[command(about = "Remove all registered data")]
    Clear(clear::ClearArgs),
    #[command(about = "Show information about moro")]
    About,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Everything a command needs for one invocation.
pub struct Context {
    pub config: Config,
    pub records: Records,
    pub today: NaiveDate,
    pub now: TimeOfDay,
}

impl Context {
    /// Loads the user's configuration and store, using the local clock.
    pub fn load() -> Result<Self> {
        let config = Config::read().context("Could not load the configuration")?;
        let records = Records::new(&config).context("Could not open the database")?;
        let now = Local::now();
        Ok(Self::new(config, records, now.date_naive(), TimeOfDay::from(now.time())))
    }

    pub fn new(config: Config, records: Records, today: NaiveDate, now: TimeOfDay) -> Self {
        Self {
            config,
            records,
            today,
            now,
        }
    }

    /// Parses an optional `HH:mm` argument, defaulting to the current time.
    pub fn time_or_now(&self, arg: Option<&str>) -> Result<TimeOfDay> {
        match arg {
            Some(value) => Ok(TimeOfDay::parse(value)?),
            None => Ok(self.now),
        }
    }

    /// Merges `update` into the stored record of its date and writes it back.
    pub fn apply(&mut self, update: Update) -> Result<DailyRecord> {
        let existing = self.records.fetch(update.date).context("Could not read today's record")?;
        let record = merge(existing, &update, &self.config);
        self.records.upsert(&record).context("Could not save today's record")?;
        Ok(record)
    }
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Runs the parsed command. Only commands touching records open the store.
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Start(args)) => start::cmd(args, &mut Context::load()?),
            Some(Commands::End(args)) => end::cmd(args, &mut Context::load()?),
            Some(Commands::Break(args)) => breaks::cmd(args, &mut Context::load()?),
            Some(Commands::Note(args)) => note::cmd(args, &mut Context::load()?),
            Some(Commands::Report(args)) => report::cmd(args, &Context::load()?),
            Some(Commands::Clear(args)) => clear::cmd(args, &mut Context::load()?),
            Some(Commands::Config(args)) => config::cmd(args),
            Some(Commands::About) => about::cmd(),
            None => next::cmd(&mut Context::load()?),
        }
    }
}
