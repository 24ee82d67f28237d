use crate::libs::task::{Priority, SearchCriteria, Status, Task, TaskUpdate};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const TEMP_EXTENSION: &str = "tmp";

/// Task list backed by a JSON file.
///
/// The whole list is held in memory in insertion order. Every successful
/// change rewrites the file before the method returns.
#[derive(Debug)]
pub struct Tasks {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: Option<u64>,
}

impl Tasks {
    /// Opens the task file at `path`.
    ///
    /// The file must exist. Empty or malformed content gives an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Tasks> {
        let path = path.into();
        let tasks = Self::load(&path)?;
        let next_id = Self::compute_next_id(&tasks);
        if next_id.is_none() {
            warn!(path = %path.display(), "Highest task id is in use, new tasks cannot be added");
        }
        debug!(path = %path.display(), count = tasks.len(), ?next_id, "Task file loaded");

        Ok(Tasks { path, tasks, next_id })
    }

    fn load(path: &Path) -> Result<Vec<Task>> {
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read task file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => Ok(tasks),
            Err(error) => {
                warn!(path = %path.display(), %error, "Task file is malformed, starting with an empty list");
                Ok(Vec::new())
            }
        }
    }

    /// `None` when the highest id already holds `u64::MAX`.
    fn compute_next_id(tasks: &[Task]) -> Option<u64> {
        tasks.iter().map(Task::id).max().unwrap_or(0).checked_add(1)
    }

    /// Writes the whole list to a sibling temp file and renames it over the
    /// task file. The temp file is removed when either step fails.
    pub fn save(&self) -> Result<()> {
        let temp_path = self.path.with_extension(TEMP_EXTENSION);
        if let Err(error) = self.write_replacing(&temp_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(error);
        }
        debug!(path = %self.path.display(), count = self.tasks.len(), "Task file saved");

        Ok(())
    }

    fn write_replacing(&self, temp_path: &Path) -> Result<()> {
        let file = File::create(temp_path).with_context(|| format!("Failed to write task file {}", temp_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.tasks)?;
        writer.flush()?;
        drop(writer);

        fs::rename(temp_path, &self.path).with_context(|| format!("Failed to replace task file {}", self.path.display()))
    }

    /// Appends a new task and saves. On a failed save the task is taken back
    /// out and the counter is left where it was.
    pub fn add(&mut self, title: &str, description: &str, category: &str, due_date: NaiveDate, priority: Priority) -> Result<&Task> {
        let Some(id) = self.next_id else {
            bail!("No task ids left in {}", self.path.display());
        };

        self.tasks.push(Task::new(id, title, description, category, due_date, priority));
        if let Err(error) = self.save() {
            self.tasks.pop();
            return Err(error);
        }
        self.next_id = id.checked_add(1);
        debug!(id, "Task added");

        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            return Ok(false);
        };
        let removed = self.tasks.remove(index);
        if let Err(error) = self.save() {
            self.tasks.insert(index, removed);
            return Err(error);
        }
        debug!(id, "Task deleted");

        Ok(true)
    }

    pub fn update_info(&mut self, id: u64, update: &TaskUpdate) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            return Ok(false);
        };
        let previous = self.tasks[index].clone();
        update.apply(&mut self.tasks[index]);
        if let Err(error) = self.save() {
            self.tasks[index] = previous;
            return Err(error);
        }
        debug!(id, "Task updated");

        Ok(true)
    }

    pub fn update_status(&mut self, id: u64, status: Status) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            return Ok(false);
        };
        let previous = std::mem::replace(&mut self.tasks[index].status, status);
        if let Err(error) = self.save() {
            self.tasks[index].status = previous;
            return Err(error);
        }
        debug!(id, %status, "Task status changed");

        Ok(true)
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.matches(criteria)).collect()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Id the next added task gets, or `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<u64> {
        self.next_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
