//! Task record and the typed shapes used to change or look it up.
//!
//! A [`Task`] is one entry of the task file. Changes to an existing task go
//! through [`TaskUpdate`], a partial record where every field defaults to
//! "unchanged", and lookups go through [`SearchCriteria`], the same partial
//! record plus the task id.
//!
//! ## Matching rules
//!
//! - `id` and `due_date` compare by exact equality
//! - `title`, `description` and `category` compare case-insensitively
//! - `priority` and `status` are parsed case-insensitively from their labels,
//!   so comparing the parsed values compares the case-folded labels
//! - criteria with no field set match nothing
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskkeep::libs::task::{Priority, SearchCriteria, Task};
//!
//! let due = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! let task = Task::new(1, "Buy milk", "2%", "Errands", due, Priority::Low);
//!
//! let criteria = SearchCriteria {
//!     category: Some("errands".to_string()),
//!     ..Default::default()
//! };
//! assert!(task.matches(&criteria));
//! assert!(!task.matches(&SearchCriteria::default()));
//! ```

use crate::libs::input::InputError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Task priority.
///
/// Serialized as `"low"`, `"medium"` or `"high"`. The localized labels written
/// by older task files are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "low", alias = "низкий")]
    Low,
    #[serde(rename = "medium", alias = "средний")]
    Medium,
    #[serde(rename = "high", alias = "высокий")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "низкий" => Ok(Priority::Low),
            "medium" | "средний" => Ok(Priority::Medium),
            "high" | "высокий" => Ok(Priority::High),
            _ => Err(InputError::InvalidPriority(s.trim().to_string())),
        }
    }
}

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "done", alias = "выполнена")]
    Done,
    #[default]
    #[serde(rename = "not done", alias = "не выполнена")]
    NotDone,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Done, Status::NotDone];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Done => "done",
            Status::NotDone => "not done",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        match normalized.as_str() {
            "done" | "выполнена" => Ok(Status::Done),
            "not done" | "не выполнена" => Ok(Status::NotDone),
            _ => Err(InputError::InvalidStatus(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Status,
}

impl Task {
    /// Creates a task that is not done yet.
    pub fn new(id: u64, title: &str, description: &str, category: &str, due_date: NaiveDate, priority: Priority) -> Self {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            due_date,
            priority,
            status: Status::NotDone,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns `true` when `criteria` has at least one field set and every
    /// set field matches this task.
    pub fn matches(&self, criteria: &SearchCriteria) -> bool {
        if criteria.is_empty() {
            return false;
        }

        criteria.id.map_or(true, |id| self.id == id)
            && criteria.title.as_deref().map_or(true, |title| eq_ignore_case(&self.title, title))
            && criteria.description.as_deref().map_or(true, |description| eq_ignore_case(&self.description, description))
            && criteria.category.as_deref().map_or(true, |category| eq_ignore_case(&self.category, category))
            && criteria.due_date.map_or(true, |due_date| self.due_date == due_date)
            && criteria.priority.map_or(true, |priority| self.priority == priority)
            && criteria.status.map_or(true, |status| self.status == status)
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// New values for an existing task. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}

/// Fields to look tasks up by. Unset fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl SearchCriteria {
    pub fn by_id(id: u64) -> Self {
        SearchCriteria {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

impl From<TaskUpdate> for SearchCriteria {
    fn from(fields: TaskUpdate) -> Self {
        SearchCriteria {
            id: None,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            due_date: fields.due_date,
            priority: fields.priority,
            status: fields.status,
        }
    }
}
