use super::{report, Context};
use crate::libs::messages::Message;
use crate::libs::record::Update;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

const EMPTY_NOTE: &str = "...";

#[derive(Debug, Args, Default)]
pub struct NoteArgs {
    /// Note text; the words are joined with spaces
    #[arg(trailing_var_arg = true)]
    pub note: Vec<String>,
}

/// Appends a note to today, stamped with the current time.
pub fn cmd(args: NoteArgs, ctx: &mut Context) -> Result<()> {
    let text = args.note.join(" ");
    let text = if text.trim().is_empty() { EMPTY_NOTE.to_string() } else { text };

    ctx.apply(Update::add_note(ctx.today, text, ctx.now))?;

    msg_success!(Message::NoteAdded);
    report::today(ctx)
}
