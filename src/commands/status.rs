use super::prompt;
use crate::{
    db::tasks::Tasks,
    libs::{input::parse_status, messages::Message, task::Status},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct StatusArgs {
    /// ID of the task
    id: Option<u64>,
    /// New status: done or not done
    status: Option<String>,
}

pub fn cmd(args: StatusArgs, tasks: &mut Tasks) -> Result<()> {
    let status = match args.status.as_deref().map(parse_status).transpose() {
        Ok(status) => status,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };

    let id = match args.id {
        Some(id) => id,
        None => prompt::id()?,
    };
    let status = match status {
        Some(status) => status,
        None => prompt::select(Message::PromptTaskStatus, &Status::ALL)?,
    };

    if tasks.update_status(id, status)? {
        msg_success!(Message::TaskStatusChanged(id, status.to_string()));
    } else {
        msg_error!(Message::TaskNotFoundWithId(id));
    }

    Ok(())
}
