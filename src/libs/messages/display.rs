//! Display implementation for taskkeep messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between the interactive menu and the subcommands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskStatusChanged(id, status) => format!("Status of task {} changed to '{}'", id, status),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasks => "There are no tasks yet.".to_string(),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::NoSearchCriteria => "No search criteria given, nothing to look for.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),

            // === INPUT MESSAGES ===
            Message::InvalidInput(reason) => format!("Invalid input: {}", reason),

            // === MENU MESSAGES ===
            Message::MenuTitle => "Menu".to_string(),
            Message::MenuAddTask => "Add task".to_string(),
            Message::MenuDeleteTask => "Delete task".to_string(),
            Message::MenuUpdateTask => "Change task details".to_string(),
            Message::MenuUpdateStatus => "Change task status".to_string(),
            Message::MenuShowAll => "Show all tasks".to_string(),
            Message::MenuSearch => "Search tasks".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::Goodbye => "Bye!".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigDiscarded(reason) => format!("Existing configuration is unreadable and will be replaced: {}", reason),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigModuleStorage => "Storage".to_string(),
            Message::TaskFileCreated(path) => format!("Created empty task file {}", path.display()),
            Message::TaskFileIsDirectory(path) => format!("{} is a directory, not a task file", path.display()),
            Message::UsingTaskFile(path) => format!("Using task file {}", path.display()),

            // === PROMPTS ===
            Message::PromptTaskId => "Task ID".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskDueDate => "Due date (dd.mm.yyyy)".to_string(),
            Message::PromptTaskPriority => "Priority (low, medium, high)".to_string(),
            Message::PromptTaskStatus => "Status (done, not done)".to_string(),
            Message::PromptOptional(prompt) => format!("{} (optional)", prompt),
            Message::PromptTaskFile => "Path of the task file".to_string(),
        };
        write!(f, "{}", text)
    }
}
