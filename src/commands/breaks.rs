use super::{report, Context};
use crate::libs::messages::Message;
use crate::libs::record::{validate_break_minutes, Update};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct BreakArgs {
    /// Total break minutes of today, defaults to BREAK_DEFAULT
    #[arg(short, long, allow_negative_numbers = true)]
    pub duration: Option<i64>,
}

/// Sets today's total break duration and shows the day's report.
pub fn cmd(args: BreakArgs, ctx: &mut Context) -> Result<()> {
    let minutes = match args.duration {
        Some(duration) => validate_break_minutes(duration)?,
        None => ctx.config.break_default_minutes,
    };
    ctx.apply(Update::set_break(ctx.today, minutes))?;

    msg_success!(Message::BreakRegistered(minutes));
    report::today(ctx)
}
