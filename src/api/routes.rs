use axum::{
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::api::AppState;
use crate::auth::{api as auth_api, auth_middleware};
use crate::lists::api as lists_api;
use crate::middleware::request_logging;
use crate::tasks::api as tasks_api;

/// Create the application router.
///
/// `/api/auth/*` is public; every list and task route sits behind the bearer
/// token guard. When `static_dir` is given, unmatched paths are served from it.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(auth_api::register))
        .route("/auth/login", post(auth_api::login));

    let protected_routes = Router::new()
        .route(
            "/lists",
            get(lists_api::get_lists).post(lists_api::create_list),
        )
        .route(
            "/lists/:id",
            put(lists_api::update_list).delete(lists_api::delete_list),
        )
        .route("/tasks", post(tasks_api::create_task))
        .route("/tasks/list/:list_id", get(tasks_api::get_tasks_for_list))
        .route(
            "/tasks/:id",
            put(tasks_api::update_task).delete(tasks_api::delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            state.jwt_handler.clone(),
            auth_middleware,
        ));

    let mut app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", auth_routes.merge(protected_routes))
        .with_state(state);

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

// ===== Route Handlers =====

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}
