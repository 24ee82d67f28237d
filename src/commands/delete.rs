use super::prompt;
use crate::{db::tasks::Tasks, libs::messages::Message, msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: Option<u64>,
}

pub fn cmd(args: DeleteArgs, tasks: &mut Tasks) -> Result<()> {
    let id = match args.id {
        Some(id) => id,
        None => prompt::id()?,
    };

    if tasks.delete(id)? {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(id));
    }

    Ok(())
}
