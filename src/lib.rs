//! Taskboard Backend Library
//!
//! Users register and log in, then manage their own lists and the tasks
//! inside them. Exposes every module for the server binary and the
//! integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod lists;
pub mod middleware;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use db::Database;
pub use error::ApiError;
