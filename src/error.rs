//! API error taxonomy shared by every service and handler

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Failure kinds a service operation can end with.
///
/// `NotFound` covers both "absent" and "owned by someone else" so that
/// callers cannot probe for resources they do not own.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Unauthorized(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                write!(f, "{}", msg)
            }
            ApiError::Internal(err) => write!(f, "internal error: {:#}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

/// Bodies that fail to parse (wrong content type, bad JSON, missing or
/// mistyped fields) are client errors like any other validation failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                "Internal server error".to_string()
            }
            ApiError::Validation(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => msg,
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err = anyhow::anyhow!("disk I/O error");
        let api_err: ApiError = err.into();

        match api_err {
            ApiError::Internal(_) => (),
            _ => panic!("Expected Internal error"),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::validation("title is required").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("Invalid credentials".into())
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("List not found").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_detail_not_exposed() {
        let response =
            ApiError::Internal(anyhow::anyhow!("UNIQUE constraint failed: secret detail"))
                .into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["error"], "Internal server error");
    }
}
