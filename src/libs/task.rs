//! Task domain types.
//!
//! `Task` is the single entity tracked by taskql. Alongside it live the
//! value types used to create, filter and partially update tasks, plus the
//! aggregate `TaskStats`.

use crate::libs::error::{TaskError, TaskResult};
use crate::libs::messages::Message;
use chrono::{SecondsFormat, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Importance level attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    /// Parses a priority, ignoring surrounding whitespace and letter case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        [Priority::Low, Priority::Medium, Priority::High]
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TaskError::validation(Message::UnknownPriority(value.to_string())))
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|err: TaskError| FromSqlError::Other(Box::new(err)))
    }
}

/// Current instant in the fixed timestamp format used for `created_at` and
/// `updated_at`: RFC 3339, UTC, millisecond precision.
///
/// All values have the same width, so lexical order equals chronological order.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    /// Creates a pending task with a fresh id and both timestamps set to now.
    pub fn new(title: String, description: Option<String>, priority: Priority) -> Self {
        let now = timestamp_now();
        Task {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            completed: false,
            priority,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Moves `updated_at` to now. Never moves it backwards, so a clock step
    /// cannot break `created_at <= updated_at`.
    pub fn touch(&mut self) {
        let now = timestamp_now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

/// Completion filter for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl From<Option<bool>> for TaskFilter {
    fn from(completed: Option<bool>) -> Self {
        match completed {
            None => TaskFilter::All,
            Some(true) => TaskFilter::Completed,
            Some(false) => TaskFilter::Pending,
        }
    }
}

/// Payload for creating a task. Absent priority means `Priority::Medium`.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        NewTask {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial update. `None` leaves a field untouched.
///
/// `description` is doubly optional: `Some(None)` clears the description,
/// `Some(Some(text))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

impl TaskUpdate {
    /// Checks the present fields and normalizes the title.
    pub fn validated(mut self) -> TaskResult<Self> {
        if let Some(title) = self.title.take() {
            self.title = Some(validate_title(&title)?);
        }
        Ok(self)
    }

    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
    }
}

/// Returns the trimmed title, rejecting blank ones.
pub fn validate_title(title: &str) -> TaskResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::validation(Message::TaskTitleRequired));
    }
    Ok(trimmed.to_string())
}

/// Aggregate counts over all tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub high_priority: i64,
}
