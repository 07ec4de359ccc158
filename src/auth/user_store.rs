//! User Storage
//! Mission: Persist and look up user accounts in SQLite

use crate::auth::models::User;
use crate::db::Database;
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, ErrorCode, OptionalExtension, Row};
use tracing::info;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

/// User storage over the shared database
#[derive(Clone)]
pub struct UserStore {
    db: Database,
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl UserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Whether any account already uses this email or username
    pub async fn exists_by_email_or_username(&self, email: &str, username: &str) -> Result<bool> {
        let conn = self.db.lock().await;
        let found: Option<i64> = conn
            .query_row(
                "SELECT id FROM users WHERE email = ?1 OR username = ?2 LIMIT 1",
                params![email, username],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to check for existing user")?;

        Ok(found.is_some())
    }

    /// Get user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.db.lock().await;
        let sql = format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS);

        conn.query_row(&sql, params![email], user_from_row)
            .optional()
            .context("Failed to load user by email")
    }

    /// Insert a new user whose password has already been hashed.
    ///
    /// Returns `None` when the username or email is already taken, which can
    /// still happen after `exists_by_email_or_username` if two registrations race.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>> {
        let created_at = Utc::now();

        let conn = self.db.lock().await;
        let inserted = conn.execute(
            "INSERT INTO users (username, email, password_hash, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![username, email, password_hash, created_at],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                return Ok(None);
            }
            Err(e) => return Err(e).context("Failed to insert user"),
        }

        let user = User {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        };

        info!("✅ Created user: {} ({})", user.username, user.id);

        Ok(Some(user))
    }
}
