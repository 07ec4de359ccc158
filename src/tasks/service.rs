//! Task Service
//! Mission: CRUD over tasks, scoped to the owner of the parent list

use crate::api::MessageResponse;
use crate::error::ApiError;
use crate::tasks::{
    models::{CreateTaskRequest, Task, UpdateTaskRequest, PRIORITY_HIGH, PRIORITY_LOW},
    store::{NewTask, TaskStore},
};

const LIST_NOT_FOUND: &str = "List not found";
const TASK_NOT_FOUND: &str = "Task not found";

pub struct TaskService {
    store: TaskStore,
}

fn validate_priority(priority: i64) -> Result<i64, ApiError> {
    if !(PRIORITY_LOW..=PRIORITY_HIGH).contains(&priority) {
        return Err(ApiError::validation(format!(
            "priority must be between {} and {}",
            PRIORITY_LOW, PRIORITY_HIGH
        )));
    }
    Ok(priority)
}

impl TaskService {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub async fn list_by_list(&self, list_id: i64, owner_id: i64) -> Result<Vec<Task>, ApiError> {
        self.store
            .list_for_list(list_id, owner_id)
            .await?
            .ok_or_else(|| ApiError::not_found(LIST_NOT_FOUND))
    }

    pub async fn create(&self, owner_id: i64, req: CreateTaskRequest) -> Result<Task, ApiError> {
        let title = req.title.trim();
        if title.is_empty() {
            return Err(ApiError::validation("title is required"));
        }
        let priority = validate_priority(req.priority.unwrap_or(PRIORITY_LOW))?;

        let new = NewTask {
            list_id: req.list_id,
            title,
            description: req.description.as_deref(),
            priority,
            due_date: req.due_date,
        };

        self.store
            .insert(owner_id, new)
            .await?
            .ok_or_else(|| ApiError::not_found(LIST_NOT_FOUND))
    }

    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        mut req: UpdateTaskRequest,
    ) -> Result<Task, ApiError> {
        if let Some(title) = req.title.as_mut() {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(ApiError::validation("title cannot be empty"));
            }
            *title = trimmed.to_string();
        }
        if let Some(priority) = req.priority {
            validate_priority(priority)?;
        }

        self.store
            .update(id, owner_id, &req)
            .await?
            .ok_or_else(|| ApiError::not_found(TASK_NOT_FOUND))
    }

    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<MessageResponse, ApiError> {
        self.store
            .delete(id, owner_id)
            .await?
            .ok_or_else(|| ApiError::not_found(TASK_NOT_FOUND))?;

        Ok(MessageResponse::new("Task deleted successfully"))
    }
}
