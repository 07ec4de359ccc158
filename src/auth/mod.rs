//! Authentication Module
//! Mission: Account registration, login and bearer-token access control

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod user_store;

pub use jwt::JwtHandler;
pub use middleware::auth_middleware;
pub use models::Claims;
pub use password::PasswordHasher;
pub use service::AuthService;
pub use user_store::UserStore;
