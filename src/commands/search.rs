use super::{prompt, today};
use crate::{
    db::tasks::Tasks,
    libs::{
        input::{parse_id, InputError, TaskParams},
        messages::Message,
        task::{SearchCriteria, Task},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Task ID
    #[arg(long)]
    id: Option<u64>,
    /// Title, case-insensitive
    #[arg(short, long)]
    title: Option<String>,
    /// Description, case-insensitive
    #[arg(short, long)]
    description: Option<String>,
    /// Category, case-insensitive
    #[arg(short, long)]
    category: Option<String>,
    /// Due date (dd.mm.yyyy)
    #[arg(long)]
    due: Option<String>,
    /// Priority: low, medium or high
    #[arg(short, long)]
    priority: Option<String>,
    /// Status: done or not done
    #[arg(short, long)]
    status: Option<String>,
}

/// Finds tasks matching every given field. Without any flags every field is
/// asked for.
pub fn cmd(args: SearchArgs, tasks: &Tasks) -> Result<()> {
    let params = TaskParams {
        title: args.title,
        description: args.description,
        category: args.category,
        due_date: args.due,
        priority: args.priority,
        status: args.status,
    };

    let (id, params) = if args.id.is_none() && params.is_empty() {
        (prompt::optional_text(Message::PromptTaskId)?, prompt::task_params()?)
    } else {
        (args.id.map(|id| id.to_string()), params)
    };

    let criteria = match criteria(id.as_deref(), &params, today()) {
        Ok(criteria) => criteria,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };
    let Some(found) = matching(tasks, &criteria) else {
        msg_warning!(Message::NoSearchCriteria);
        return Ok(());
    };
    if found.is_empty() {
        msg_info!(Message::TasksNotFound, true);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(found);
    Ok(())
}

/// Tasks matching `criteria`, or `None` when no criterion is set.
pub fn matching<'a>(tasks: &'a Tasks, criteria: &SearchCriteria) -> Option<Vec<&'a Task>> {
    if criteria.is_empty() {
        return None;
    }
    Some(tasks.search(criteria))
}

fn criteria(id: Option<&str>, params: &TaskParams, today: NaiveDate) -> Result<SearchCriteria, InputError> {
    let mut criteria = SearchCriteria::from(params.parse(today)?);
    criteria.id = id.map(parse_id).transpose()?;
    Ok(criteria)
}
