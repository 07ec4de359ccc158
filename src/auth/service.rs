//! Auth Service
//! Mission: Register accounts and exchange credentials for session tokens

use crate::auth::{
    jwt::JwtHandler,
    models::{AuthResponse, UserResponse},
    password::PasswordHasher,
    user_store::UserStore,
};
use crate::error::ApiError;
use std::sync::Arc;
use tracing::{info, warn};

const DUPLICATE_USER: &str = "Username or email already exists";
/// Shared by every login failure so callers cannot tell which part was wrong
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService {
    users: UserStore,
    hasher: PasswordHasher,
    jwt: Arc<JwtHandler>,
}

impl AuthService {
    pub fn new(users: UserStore, hasher: PasswordHasher, jwt: Arc<JwtHandler>) -> Self {
        Self { users, hasher, jwt }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ApiError::validation(
                "username, email and password are required",
            ));
        }

        if self
            .users
            .exists_by_email_or_username(email, username)
            .await?
        {
            warn!("Registration rejected, duplicate user: {} / {}", username, email);
            return Err(ApiError::validation(DUPLICATE_USER));
        }

        let password_hash = self.hasher.hash(password).await?;

        let user = self
            .users
            .create_user(username, email, &password_hash)
            .await?
            .ok_or_else(|| ApiError::validation(DUPLICATE_USER))?;

        let token = self.jwt.generate_token(&user)?;

        info!("🔐 Registered user: {} ({})", user.username, user.id);

        Ok(AuthResponse {
            user: UserResponse::from_user(&user),
            token,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let email = email.trim();

        let Some(user) = self.users.get_user_by_email(email).await? else {
            warn!("❌ Failed login attempt (unknown email): {}", email);
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            warn!("❌ Failed login attempt (bad password): {}", email);
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.jwt.generate_token(&user)?;

        info!("✅ Login successful: {} ({})", user.username, user.id);

        Ok(AuthResponse {
            user: UserResponse::from_user(&user),
            token,
        })
    }
}
