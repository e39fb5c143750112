use super::Context;
use crate::libs::hours::predict_end_time;
use crate::libs::messages::Message;
use crate::libs::record::Update;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct StartArgs {
    /// Start time as HH:mm, defaults to now
    pub start: Option<String>,
}

/// Registers the start of today and prints when a full day would end.
pub fn cmd(args: StartArgs, ctx: &mut Context) -> Result<()> {
    let start = ctx.time_or_now(args.start.as_deref())?;
    ctx.apply(Update::set_start(ctx.today, start))?;

    msg_success!(Message::StartRegistered(start.to_string()), true);
    let until = predict_end_time(start, &ctx.config);
    msg_info!(Message::ShouldWorkUntil(until.to_string()));
    msg_info!(Message::StartTip, true);
    Ok(())
}
