//! Task Storage
//! Mission: Task persistence, scoped to owners through the parent list

use crate::db::Database;
use crate::lists::find_owned_list;
use crate::tasks::models::{Task, UpdateTaskRequest};
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

const TASK_COLUMNS: &str =
    "t.id, t.list_id, t.title, t.description, t.priority, t.due_date, t.completed, t.completed_at, t.created_at";

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        list_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        priority: row.get(4)?,
        due_date: row.get(5)?,
        completed: row.get(6)?,
        completed_at: row.get(7)?,
        created_at: row.get(8)?,
    })
}

/// Scoped fetch: the task with this id, only if its list belongs to `owner_id`
pub fn find_owned_task(conn: &Connection, id: i64, owner_id: i64) -> Result<Option<Task>> {
    let sql = format!(
        "SELECT {} FROM tasks t
         JOIN lists l ON t.list_id = l.id
         WHERE t.id = ?1 AND l.user_id = ?2",
        TASK_COLUMNS
    );

    conn.query_row(&sql, params![id, owner_id], task_from_row)
        .optional()
        .context("Failed to load task")
}

/// Values for a new task row
pub struct NewTask<'a> {
    pub list_id: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub priority: i64,
    pub due_date: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Tasks of an owned list: open before done, then priority, due date and recency.
    /// `None` when the list is absent or not owned.
    pub async fn list_for_list(&self, list_id: i64, owner_id: i64) -> Result<Option<Vec<Task>>> {
        let conn = self.db.lock().await;
        if find_owned_list(&conn, list_id, owner_id)?.is_none() {
            return Ok(None);
        }

        let sql = format!(
            "SELECT {} FROM tasks t
             WHERE t.list_id = ?1
             ORDER BY
                CASE WHEN t.completed THEN 1 ELSE 0 END,
                t.priority DESC,
                t.due_date ASC NULLS LAST,
                t.created_at DESC,
                t.id DESC",
            TASK_COLUMNS
        );
        let mut stmt = conn.prepare_cached(&sql)?;
        let tasks = stmt
            .query_map(params![list_id], task_from_row)?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to load tasks")?;

        Ok(Some(tasks))
    }

    /// Insert into an owned list; `None` when the list is absent or not owned
    pub async fn insert(&self, owner_id: i64, new: NewTask<'_>) -> Result<Option<Task>> {
        let created_at = Utc::now();

        let conn = self.db.lock().await;
        if find_owned_list(&conn, new.list_id, owner_id)?.is_none() {
            return Ok(None);
        }

        conn.execute(
            "INSERT INTO tasks (list_id, title, description, priority, due_date, completed, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)",
            params![
                new.list_id,
                new.title,
                new.description,
                new.priority,
                new.due_date,
                created_at
            ],
        )
        .context("Failed to insert task")?;

        let task = Task {
            id: conn.last_insert_rowid(),
            list_id: new.list_id,
            title: new.title.to_string(),
            description: new.description.map(str::to_string),
            priority: new.priority,
            due_date: new.due_date,
            completed: false,
            completed_at: None,
            created_at,
        };

        info!("📌 Created task {} in list {}", task.id, task.list_id);

        Ok(Some(task))
    }

    /// Apply a partial update to an owned task
    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        changes: &UpdateTaskRequest,
    ) -> Result<Option<Task>> {
        let conn = self.db.lock().await;
        let Some(mut task) = find_owned_task(&conn, id, owner_id)? else {
            return Ok(None);
        };

        task.apply(changes, Utc::now());

        conn.execute(
            "UPDATE tasks
             SET title = ?1, description = ?2, priority = ?3, due_date = ?4,
                 completed = ?5, completed_at = ?6
             WHERE id = ?7",
            params![
                task.title,
                task.description,
                task.priority,
                task.due_date,
                task.completed,
                task.completed_at,
                task.id
            ],
        )
        .context("Failed to update task")?;

        Ok(Some(task))
    }

    /// Ownership check through the list join, then delete by id
    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<Option<Task>> {
        let conn = self.db.lock().await;
        let Some(task) = find_owned_task(&conn, id, owner_id)? else {
            return Ok(None);
        };

        conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .context("Failed to delete task")?;

        info!("🗑️  Deleted task {} from list {}", id, task.list_id);

        Ok(Some(task))
    }
}
