use super::Context;
use crate::libs::formatter::format_date;
use crate::libs::hours::compute_work_hours;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::{Context as _, Result};
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct ReportArgs {
    #[arg(short, long, help = "Show every registered day")]
    pub all: bool,
}

pub fn cmd(args: ReportArgs, ctx: &Context) -> Result<()> {
    if args.all {
        let records = ctx.records.fetch_all().context("Could not read the records")?;
        View::report(&records, &ctx.config);
        return Ok(());
    }
    today(ctx)
}

/// Prints today's record with its worked time, if there is one.
pub fn today(ctx: &Context) -> Result<()> {
    match ctx.records.fetch(ctx.today).context("Could not read today's record")? {
        Some(record) => {
            let work_hours = compute_work_hours(Some(&record));
            View::day(&record, work_hours.as_ref(), &ctx.config);
        }
        None => {
            msg_info!(Message::NoRecordForDate(format_date(ctx.today, &ctx.config.date_format)));
        }
    }
    Ok(())
}
