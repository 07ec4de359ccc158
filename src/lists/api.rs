//! List API Endpoints

use crate::api::{AppState, MessageResponse};
use crate::auth::Claims;
use crate::error::ApiError;
use crate::lists::models::{CreateListRequest, List, ListSummary, UpdateListRequest};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Extension, Json,
};

/// GET /api/lists
pub async fn get_lists(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<ListSummary>>, ApiError> {
    Ok(Json(state.lists.list_all(claims.id).await?))
}

/// POST /api/lists
pub async fn create_list(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<List>), ApiError> {
    let Json(payload) = payload?;
    let list = state.lists.create(claims.id, payload).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// PUT /api/lists/:id
pub async fn update_list(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateListRequest>, JsonRejection>,
) -> Result<Json<List>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    Ok(Json(state.lists.update(id, claims.id, payload).await?))
}

/// DELETE /api/lists/:id
pub async fn delete_list(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.lists.delete(id, claims.id).await?))
}
