//! Task API Endpoints

use crate::api::{AppState, MessageResponse};
use crate::auth::Claims;
use crate::error::ApiError;
use crate::tasks::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Extension, Json,
};

/// GET /api/tasks/list/:list_id
pub async fn get_tasks_for_list(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Path(list_id) = path?;
    Ok(Json(state.tasks.list_by_list(list_id, claims.id).await?))
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(payload) = payload?;
    let task = state.tasks.create(claims.id, payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/:id
pub async fn update_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    Ok(Json(state.tasks.update(id, claims.id, payload).await?))
}

/// DELETE /api/tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.tasks.delete(id, claims.id).await?))
}
