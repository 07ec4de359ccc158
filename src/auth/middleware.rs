//! Authentication Middleware
//! Mission: Protect list and task endpoints with JWT validation

use crate::auth::jwt::JwtHandler;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Auth middleware that validates bearer tokens.
///
/// On success the decoded [`Claims`](crate::auth::models::Claims) are placed in
/// the request extensions; handlers read them with `Extension<Claims>`. The
/// token is trusted as-is, no user lookup happens per request.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            debug!(path = %req.uri().path(), "Rejected request: missing bearer token");
            AuthError::MissingToken
        })?;

    let claims = jwt_handler.validate_token(token).map_err(|e| {
        debug!(path = %req.uri().path(), error = %e, "Rejected request: invalid or expired token");
        AuthError::InvalidToken
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Auth error types.
///
/// Kept apart for logging; clients get the same 401 body for both.
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Authentication required" })),
        )
            .into_response()
    }
}
