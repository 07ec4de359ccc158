//! Authentication API Endpoints
//! Mission: Provide register and login endpoints

use crate::api::AppState;
use crate::auth::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::info;

/// Register endpoint - POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Json(payload) = payload?;
    info!("📝 Registration attempt: {}", payload.username);

    let response = state
        .auth
        .register(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login endpoint - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(payload) = payload?;
    info!("🔐 Login attempt: {}", payload.email);

    let response = state.auth.login(&payload.email, &payload.password).await?;

    Ok(Json(response))
}
