//! Interactive menu, the default mode when no subcommand is given.

use super::{add, delete, list, search, status, update};
use crate::{db::tasks::Tasks, libs::messages::Message, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    AddTask,
    DeleteTask,
    UpdateTask,
    UpdateStatus,
    ShowAll,
    Search,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::AddTask,
        MenuItem::DeleteTask,
        MenuItem::UpdateTask,
        MenuItem::UpdateStatus,
        MenuItem::ShowAll,
        MenuItem::Search,
        MenuItem::Exit,
    ];

    fn message(&self) -> Message {
        match self {
            MenuItem::AddTask => Message::MenuAddTask,
            MenuItem::DeleteTask => Message::MenuDeleteTask,
            MenuItem::UpdateTask => Message::MenuUpdateTask,
            MenuItem::UpdateStatus => Message::MenuUpdateStatus,
            MenuItem::ShowAll => Message::MenuShowAll,
            MenuItem::Search => Message::MenuSearch,
            MenuItem::Exit => Message::MenuExit,
        }
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    loop {
        // Esc leaves the menu like Exit does.
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuTitle.to_string())
            .items(&MenuItem::ALL)
            .default(0)
            .interact_opt()?;
        let item = selection.map_or(MenuItem::Exit, |index| MenuItem::ALL[index]);

        match item {
            MenuItem::AddTask => add::cmd(Default::default(), tasks)?,
            MenuItem::DeleteTask => delete::cmd(Default::default(), tasks)?,
            MenuItem::UpdateTask => update::cmd(Default::default(), tasks)?,
            MenuItem::UpdateStatus => status::cmd(Default::default(), tasks)?,
            MenuItem::ShowAll => list::cmd(tasks),
            MenuItem::Search => search::cmd(Default::default(), tasks)?,
            MenuItem::Exit => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}
