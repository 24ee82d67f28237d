pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod menu;
pub mod prompt;
pub mod search;
pub mod status;
pub mod update;

use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_debug, msg_info,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Change task details")]
    Update(update::UpdateArgs),
    #[command(about = "Change task status")]
    Status(status::StatusArgs),
    #[command(about = "Show all tasks")]
    List,
    #[command(about = "Search tasks")]
    Search(search::SearchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let Cli { file, command } = Self::parse();
        match command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Add(args)) => add::cmd(args, &mut open_tasks(file)?),
            Some(Commands::Delete(args)) => delete::cmd(args, &mut open_tasks(file)?),
            Some(Commands::Update(args)) => update::cmd(args, &mut open_tasks(file)?),
            Some(Commands::Status(args)) => status::cmd(args, &mut open_tasks(file)?),
            Some(Commands::List) => {
                list::cmd(&open_tasks(file)?);
                Ok(())
            }
            Some(Commands::Search(args)) => search::cmd(args, &open_tasks(file)?),
            None => menu::cmd(&mut open_tasks(file)?),
        }
    }
}

/// Resolves the task file, creates it when missing and opens the store.
pub fn open_tasks(file: Option<PathBuf>) -> Result<Tasks> {
    let path = Config::read()?.task_file(file, Config::env_task_file())?;
    ensure_task_file(&path)?;
    msg_debug!(Message::UsingTaskFile(path.clone()));

    Tasks::open(path)
}

/// Creates an empty task file (and its parent directories) if none exists.
pub fn ensure_task_file(path: &Path) -> Result<()> {
    if path.is_dir() {
        msg_bail_anyhow!(Message::TaskFileIsDirectory(path.to_path_buf()));
    }
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path).with_context(|| format!("Failed to create task file {}", path.display()))?;
    msg_info!(Message::TaskFileCreated(path.to_path_buf()));

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
