use super::{end, report, start, Context};
use anyhow::Result;

/// What running moro without a subcommand does for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Start,
    End,
    Report,
}

/// Picks the next action from today's stored record.
pub fn next_action(ctx: &Context) -> Result<NextAction> {
    let action = match ctx.records.fetch(ctx.today)? {
        Some(record) if record.start.is_none() => NextAction::Start,
        Some(record) if record.end.is_none() => NextAction::End,
        Some(_) => NextAction::Report,
        None => NextAction::Start,
    };
    tracing::debug!(?action, "next undone action");
    Ok(action)
}

pub fn cmd(ctx: &mut Context) -> Result<()> {
    match next_action(ctx)? {
        NextAction::Start => start::cmd(start::StartArgs::default(), ctx),
        NextAction::End => end::cmd(end::EndArgs::default(), ctx),
        NextAction::Report => report::today(ctx),
    }
}
