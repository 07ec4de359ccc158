use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const PRIORITY_LOW: i64 = 1;
pub const PRIORITY_MEDIUM: i64 = 2;
pub const PRIORITY_HIGH: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub list_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: i64,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub list_id: i64,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub due_date: Option<NaiveDate>,
}

/// Partial update: `None` (absent or null) keeps the stored value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub due_date: Option<NaiveDate>,
    pub completed: Option<bool>,
}

impl Task {
    /// Merge a partial update into this task.
    ///
    /// `completed_at` only moves when `completed` is part of the update:
    /// stamped with `now` for `true`, cleared for `false`.
    pub fn apply(&mut self, changes: &UpdateTaskRequest, now: DateTime<Utc>) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(description) = &changes.description {
            self.description = Some(description.clone());
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(completed) = changes.completed {
            self.completed = completed;
            self.completed_at = completed.then_some(now);
        }
    }
}
