//! HTTP surface: shared state, router assembly and common response bodies

pub mod routes;

pub use routes::create_router;

use crate::auth::{AuthService, JwtHandler, PasswordHasher, UserStore};
use crate::db::Database;
use crate::lists::{ListService, ListStore};
use crate::tasks::{TaskService, TaskStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub lists: Arc<ListService>,
    pub tasks: Arc<TaskService>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AppState {
    pub fn new(db: Database, jwt_handler: Arc<JwtHandler>, hasher: PasswordHasher) -> Self {
        Self {
            auth: Arc::new(AuthService::new(
                UserStore::new(db.clone()),
                hasher,
                jwt_handler.clone(),
            )),
            lists: Arc::new(ListService::new(ListStore::new(db.clone()))),
            tasks: Arc::new(TaskService::new(TaskStore::new(db))),
            jwt_handler,
        }
    }
}

/// `{ "message": ... }` body returned by delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
