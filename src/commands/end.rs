use super::{report, Context};
use crate::libs::messages::Message;
use crate::libs::record::Update;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct EndArgs {
    /// End time as HH:mm, defaults to now
    pub end: Option<String>,
}

/// Registers the end of today and shows the day's report.
pub fn cmd(args: EndArgs, ctx: &mut Context) -> Result<()> {
    let end = ctx.time_or_now(args.end.as_deref())?;
    ctx.apply(Update::set_end(ctx.today, end))?;

    msg_success!(Message::EndRegistered(end.to_string()));
    report::today(ctx)
}
