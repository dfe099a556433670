//! Task record as handed to the engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{optional_calendar_date, Priority, Status};

/// A task record.
///
/// Tasks are read-only input for filtering and classification: the engine
/// borrows them and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The unique identifier for the task.
    pub id: String,

    /// The task's display text.
    #[serde(default)]
    pub title: String,

    /// Task priority (defaults to normal).
    #[serde(default)]
    pub priority: Priority,

    /// Workflow status (defaults to pending).
    #[serde(default)]
    pub status: Status,

    /// Calendar date the task is due.
    #[serde(
        default,
        deserialize_with = "optional_calendar_date::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,

    /// Calendar date work on the task should begin.
    #[serde(
        default,
        deserialize_with = "optional_calendar_date::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,

    /// Estimated effort in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,

    /// The list (grouping) this task belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    /// Whether the task has child tasks.
    #[serde(default)]
    pub has_subtasks: bool,

    /// Whether the task repeats.
    #[serde(default)]
    pub is_recurring: bool,

    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending, normal-priority task with no dates.
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            priority: Priority::default(),
            status: Status::default(),
            due_date: None,
            start_date: None,
            estimated_minutes: None,
            list_id: None,
            has_subtasks: false,
            is_recurring: false,
            created_at,
        }
    }

    /// Returns true if the task has a due date strictly before `today` and is still open.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_closed() && self.due_date.is_some_and(|due| due < today)
    }
}
