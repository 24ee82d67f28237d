use super::{prompt, today};
use crate::{
    db::tasks::Tasks,
    libs::{input::TaskParams, messages::Message, view::View},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct UpdateArgs {
    /// ID of the task to change
    id: Option<u64>,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New category
    #[arg(short, long)]
    category: Option<String>,
    /// New due date (dd.mm.yyyy), today or later
    #[arg(long)]
    due: Option<String>,
    /// New priority: low, medium or high
    #[arg(short, long)]
    priority: Option<String>,
    /// New status: done or not done
    #[arg(short, long)]
    status: Option<String>,
}

impl UpdateArgs {
    fn params(self) -> TaskParams {
        TaskParams {
            title: self.title,
            description: self.description,
            category: self.category,
            due_date: self.due,
            priority: self.priority,
            status: self.status,
        }
    }
}

/// Changes task details. Without any field flags every field is asked for.
pub fn cmd(args: UpdateArgs, tasks: &mut Tasks) -> Result<()> {
    let id = match args.id {
        Some(id) => id,
        None => prompt::id()?,
    };

    let params = args.params();
    let params = if params.is_empty() { prompt::task_params()? } else { params };

    let update = match params.parse(today()) {
        Ok(update) => update,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };
    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if tasks.update_info(id, &update)? {
        msg_success!(Message::TaskUpdated(id));
        View::tasks(tasks.get(id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(id));
    }

    Ok(())
}
