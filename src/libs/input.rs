//! Conversion of raw user input into typed task values.
//!
//! Every prompt and CLI flag hands its text to the functions here before the
//! task store is touched. Failures carry an [`InputError`] naming the reason,
//! so callers can report it and skip the store call.
//!
//! Due dates are written as `dd.mm.yyyy`; `yyyy-mm-dd` is accepted as well.

use crate::libs::task::{Priority, Status, TaskUpdate};
use chrono::NaiveDate;
use thiserror::Error;

/// Date format shown to the user in prompts.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a piece of user input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a valid date, use dd.mm.yyyy")]
    BadDateFormat(String),

    #[error("Due date {} is too early", .0.format(DATE_FORMAT))]
    PastDate(NaiveDate),

    #[error("'{0}' is not a valid priority, use low, medium or high")]
    InvalidPriority(String),

    #[error("'{0}' is not a valid status, use 'done' or 'not done'")]
    InvalidStatus(String),

    #[error("'{0}' is not a valid task id")]
    InvalidId(String),
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT))
        .map_err(|_| InputError::BadDateFormat(raw.to_string()))
}

/// Parses the due date of a new task, which must be strictly after `today`.
pub fn parse_future_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let date = parse_date(raw)?;
    if date <= today {
        return Err(InputError::PastDate(date));
    }
    Ok(date)
}

/// Parses a due date used to change or find a task. `today` itself is allowed.
pub fn parse_current_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let date = parse_date(raw)?;
    if date < today {
        return Err(InputError::PastDate(date));
    }
    Ok(date)
}

pub fn parse_id(raw: &str) -> Result<u64, InputError> {
    raw.trim().parse::<u64>().map_err(|_| InputError::InvalidId(raw.trim().to_string()))
}

pub fn parse_priority(raw: &str) -> Result<Priority, InputError> {
    raw.parse()
}

pub fn parse_status(raw: &str) -> Result<Status, InputError> {
    raw.parse()
}

/// Optional task fields as typed by the user, before validation.
///
/// Missing and blank values both mean "not given".
#[derive(Debug, Clone, Default)]
pub struct TaskParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl TaskParams {
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.description, &self.category, &self.due_date, &self.priority, &self.status]
            .into_iter()
            .all(|value| given(value).is_none())
    }

    /// Validates every given field.
    ///
    /// An empty [`TaskUpdate`] means the user supplied nothing, which is not an
    /// error. The first invalid field stops validation.
    pub fn parse(&self, today: NaiveDate) -> Result<TaskUpdate, InputError> {
        Ok(TaskUpdate {
            title: given(&self.title).map(str::to_string),
            description: given(&self.description).map(str::to_string),
            category: given(&self.category).map(str::to_string),
            due_date: given(&self.due_date).map(|raw| parse_current_date(raw, today)).transpose()?,
            priority: given(&self.priority).map(parse_priority).transpose()?,
            status: given(&self.status).map(parse_status).transpose()?,
        })
    }
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
