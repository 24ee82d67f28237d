//! Interactive prompts shared by the menu and the subcommands.

use crate::libs::input::{parse_id, InputError, TaskParams};
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub fn text(prompt: Message) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Asks for a value that may be skipped with an empty answer.
pub fn optional_text(prompt: Message) -> Result<Option<String>> {
    let value = text(Message::PromptOptional(Box::new(prompt)))?;
    Ok(Some(value).filter(|value| !value.is_empty()))
}

/// Asks until the answer passes `parse`.
pub fn parsed<T>(prompt: Message, parse: impl Fn(&str) -> Result<T, InputError>) -> Result<T> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .validate_with(|input: &String| -> Result<(), String> { parse(input.as_str()).map(|_| ()).map_err(|error| error.to_string()) })
        .interact_text()?;
    Ok(parse(raw.as_str())?)
}

pub fn select<T: Copy + ToString>(prompt: Message, items: &[T]) -> Result<T> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(items)
        .default(0)
        .interact()?;
    Ok(items[selection])
}

pub fn id() -> Result<u64> {
    parsed(Message::PromptTaskId, parse_id)
}

/// Asks for every task field, each of which may be skipped.
pub fn task_params() -> Result<TaskParams> {
    Ok(TaskParams {
        title: optional_text(Message::PromptTaskTitle)?,
        description: optional_text(Message::PromptTaskDescription)?,
        category: optional_text(Message::PromptTaskCategory)?,
        due_date: optional_text(Message::PromptTaskDueDate)?,
        priority: optional_text(Message::PromptTaskPriority)?,
        status: optional_text(Message::PromptTaskStatus)?,
    })
}
