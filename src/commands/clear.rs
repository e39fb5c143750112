use super::Context;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::{Context as _, Result};
use clap::Args;

#[derive(Debug, Args, Default)]
pub struct ClearArgs {
    /// Confirm that every registered day should be deleted
    #[arg(long)]
    pub yes: bool,
}

/// Wipes the whole store, but only when confirmed with `--yes`.
pub fn cmd(args: ClearArgs, ctx: &mut Context) -> Result<()> {
    if !args.yes {
        msg_warning!(Message::ClearConfirmHint);
        return Ok(());
    }

    let removed = ctx.records.clear().context("Could not clear the database")?;
    msg_success!(Message::DataCleared(removed));
    Ok(())
}
