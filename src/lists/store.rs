//! List Storage
//! Mission: Owner-scoped persistence for lists

use crate::db::Database;
use crate::lists::models::{List, ListSummary};
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

const LIST_COLUMNS: &str = "id, user_id, title, description, color, created_at";

fn list_from_row(row: &Row<'_>) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        color: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Scoped fetch: the list with this id, only if `owner_id` owns it.
///
/// Every single-list read or mutation goes through here first; a list that
/// does not exist and a list owned by someone else both come back as `None`.
pub fn find_owned_list(conn: &Connection, id: i64, owner_id: i64) -> Result<Option<List>> {
    let sql = format!(
        "SELECT {} FROM lists WHERE id = ?1 AND user_id = ?2",
        LIST_COLUMNS
    );

    conn.query_row(&sql, params![id, owner_id], list_from_row)
        .optional()
        .context("Failed to load list")
}

#[derive(Clone)]
pub struct ListStore {
    db: Database,
}

impl ListStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All lists of an owner with task tallies, newest first
    pub async fn list_with_counts(&self, owner_id: i64) -> Result<Vec<ListSummary>> {
        let conn = self.db.lock().await;
        let mut stmt = conn.prepare_cached(
            "SELECT l.id, l.user_id, l.title, l.description, l.color, l.created_at,
                    COUNT(t.id) AS total_tasks,
                    COUNT(CASE WHEN t.completed THEN 1 END) AS completed_tasks
             FROM lists l
             LEFT JOIN tasks t ON l.id = t.list_id
             WHERE l.user_id = ?1
             GROUP BY l.id
             ORDER BY l.created_at DESC, l.id DESC",
        )?;

        let lists = stmt
            .query_map(params![owner_id], |row| {
                Ok(ListSummary {
                    list: list_from_row(row)?,
                    total_tasks: row.get(6)?,
                    completed_tasks: row.get(7)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to load lists")?;

        Ok(lists)
    }

    pub async fn find_owned(&self, id: i64, owner_id: i64) -> Result<Option<List>> {
        let conn = self.db.lock().await;
        find_owned_list(&conn, id, owner_id)
    }

    pub async fn insert(
        &self,
        owner_id: i64,
        title: &str,
        description: Option<&str>,
        color: &str,
    ) -> Result<List> {
        let created_at = Utc::now();

        let conn = self.db.lock().await;
        conn.execute(
            "INSERT INTO lists (user_id, title, description, color, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![owner_id, title, description, color, created_at],
        )
        .context("Failed to insert list")?;

        let list = List {
            id: conn.last_insert_rowid(),
            user_id: owner_id,
            title: title.to_string(),
            description: description.map(str::to_string),
            color: color.to_string(),
            created_at,
        };

        info!("🗂️  Created list {} for user {}", list.id, owner_id);

        Ok(list)
    }

    /// Replace title, description and color; `None` when not owned or absent
    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        title: &str,
        description: Option<&str>,
        color: &str,
    ) -> Result<Option<List>> {
        let conn = self.db.lock().await;
        let Some(mut list) = find_owned_list(&conn, id, owner_id)? else {
            return Ok(None);
        };

        conn.execute(
            "UPDATE lists SET title = ?1, description = ?2, color = ?3
             WHERE id = ?4 AND user_id = ?5",
            params![title, description, color, id, owner_id],
        )
        .context("Failed to update list")?;

        list.title = title.to_string();
        list.description = description.map(str::to_string);
        list.color = color.to_string();

        Ok(Some(list))
    }

    /// Delete an owned list and, through the cascade, its tasks
    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<Option<List>> {
        let conn = self.db.lock().await;
        let Some(list) = find_owned_list(&conn, id, owner_id)? else {
            return Ok(None);
        };

        conn.execute(
            "DELETE FROM lists WHERE id = ?1 AND user_id = ?2",
            params![id, owner_id],
        )
        .context("Failed to delete list")?;

        info!("🗑️  Deleted list {} of user {}", id, owner_id);

        Ok(Some(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserStore;
    use crate::lists::models::DEFAULT_LIST_COLOR;

    async fn setup() -> (ListStore, Database, i64, i64) {
        let db = Database::in_memory().unwrap();
        let users = UserStore::new(db.clone());
        let alice = users
            .create_user("alice", "alice@example.com", "hash")
            .await
            .unwrap()
            .unwrap();
        let bob = users
            .create_user("bob", "bob@example.com", "hash")
            .await
            .unwrap()
            .unwrap();
        (ListStore::new(db.clone()), db, alice.id, bob.id)
    }

    #[tokio::test]
    async fn test_insert_and_find_owned() {
        let (store, _db, alice, bob) = setup().await;

        let list = store
            .insert(alice, "Groceries", Some("weekly"), DEFAULT_LIST_COLOR)
            .await
            .unwrap();

        let found = store.find_owned(list.id, alice).await.unwrap().unwrap();
        assert_eq!(found, list);

        // Another user sees nothing
        assert!(store.find_owned(list.id, bob).await.unwrap().is_none());
        // Nonexistent id behaves the same way
        assert!(store.find_owned(list.id + 100, alice).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_counts_include_empty_lists() {
        let (store, db, alice, _bob) = setup().await;

        let empty = store.insert(alice, "Empty", None, "#000000").await.unwrap();
        let busy = store.insert(alice, "Busy", None, "#FFFFFF").await.unwrap();

        {
            let conn = db.lock().await;
            let now = Utc::now();
            for (title, completed) in [("a", true), ("b", false), ("c", true)] {
                conn.execute(
                    "INSERT INTO tasks (list_id, title, completed, created_at) VALUES (?1, ?2, ?3, ?4)",
                    params![busy.id, title, completed, now],
                )
                .unwrap();
            }
        }

        let lists = store.list_with_counts(alice).await.unwrap();
        assert_eq!(lists.len(), 2);

        // Newest first
        assert_eq!(lists[0].list.id, busy.id);
        assert_eq!(lists[0].total_tasks, 3);
        assert_eq!(lists[0].completed_tasks, 2);

        assert_eq!(lists[1].list.id, empty.id);
        assert_eq!(lists[1].total_tasks, 0);
        assert_eq!(lists[1].completed_tasks, 0);
    }

    #[tokio::test]
    async fn test_list_with_counts_scoped_to_owner() {
        let (store, _db, alice, bob) = setup().await;
        store.insert(alice, "Mine", None, "#111111").await.unwrap();

        assert!(store.list_with_counts(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_scoped_to_owner() {
        let (store, _db, alice, bob) = setup().await;
        let list = store.insert(alice, "Old", Some("desc"), "#111111").await.unwrap();

        assert!(store
            .update(list.id, bob, "Hijacked", None, "#000000")
            .await
            .unwrap()
            .is_none());

        let updated = store
            .update(list.id, alice, "New", None, "#222222")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.description, None);
        assert_eq!(updated.color, "#222222");
        assert_eq!(updated.created_at, list.created_at);

        let stored = store.find_owned(list.id, alice).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_tasks() {
        let (store, db, alice, bob) = setup().await;
        let list = store.insert(alice, "Doomed", None, "#111111").await.unwrap();

        {
            let conn = db.lock().await;
            conn.execute(
                "INSERT INTO tasks (list_id, title, created_at) VALUES (?1, 'task', ?2)",
                params![list.id, Utc::now()],
            )
            .unwrap();
        }

        assert!(store.delete(list.id, bob).await.unwrap().is_none());
        assert!(store.delete(list.id, alice).await.unwrap().is_some());
        assert!(store.delete(list.id, alice).await.unwrap().is_none());

        let conn = db.lock().await;
        let remaining: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM tasks WHERE list_id = ?1",
                params![list.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
