use super::{prompt, today};
use crate::{
    db::tasks::Tasks,
    libs::{
        input::{parse_future_date, parse_priority},
        messages::Message,
        task::Priority,
        view::View,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(short, long)]
    title: Option<String>,
    /// Task description
    #[arg(short, long)]
    description: Option<String>,
    /// Task category
    #[arg(short, long)]
    category: Option<String>,
    /// Due date (dd.mm.yyyy), must be after today
    #[arg(long)]
    due: Option<String>,
    /// Priority: low, medium or high
    #[arg(short, long)]
    priority: Option<String>,
}

/// Adds a task. Fields missing from the command line are asked for.
pub fn cmd(args: AddArgs, tasks: &mut Tasks) -> Result<()> {
    let today = today();

    // Reject bad flags before asking for anything else.
    let due_date = args.due.as_deref().map(|raw| parse_future_date(raw, today)).transpose();
    let priority = args.priority.as_deref().map(parse_priority).transpose();
    let (due_date, priority) = match (due_date, priority) {
        (Ok(due_date), Ok(priority)) => (due_date, priority),
        (Err(error), _) | (_, Err(error)) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };

    let title = match args.title {
        Some(title) => title,
        None => prompt::text(Message::PromptTaskTitle)?,
    };
    let description = match args.description {
        Some(description) => description,
        None => prompt::text(Message::PromptTaskDescription)?,
    };
    let category = match args.category {
        Some(category) => category,
        None => prompt::text(Message::PromptTaskCategory)?,
    };
    let due_date = match due_date {
        Some(due_date) => due_date,
        None => prompt::parsed(Message::PromptTaskDueDate, |raw| parse_future_date(raw, today))?,
    };
    let priority = match priority {
        Some(priority) => priority,
        None => prompt::select(Message::PromptTaskPriority, &Priority::ALL)?,
    };

    let task = tasks.add(&title, &description, &category, due_date, priority)?;
    msg_success!(Message::TaskCreated(task.id()));
    View::tasks([task]);

    Ok(())
}
