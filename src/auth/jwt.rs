//! JWT Token Handler
//! Mission: Issue and verify session tokens carrying {id, username, email}

use crate::auth::models::{Claims, User};
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// Default token lifetime
pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

/// JWT Handler for token operations
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtHandler {
    /// Create a new JWT handler with secret key and the default 24h lifetime
    pub fn new(secret: &str) -> Self {
        Self::with_expiration(secret, DEFAULT_EXPIRATION_HOURS)
    }

    pub fn with_expiration(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    pub fn expiration_hours(&self) -> i64 {
        self.expiration_hours
    }

    /// Generate a JWT token for a user
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let lifetime =
            chrono::Duration::try_hours(self.expiration_hours).context("Invalid token lifetime")?;
        let expiration = now
            .checked_add_signed(lifetime)
            .context("Invalid timestamp")?
            .timestamp() as usize;

        let claims = Claims {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            iat: now.timestamp() as usize,
            exp: expiration,
        };

        debug!(
            "Generating JWT for user {} ({}), expires in {}h",
            user.username, user.id, self.expiration_hours
        );

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String> {
        encode(&Header::default(), claims, &self.encoding_key).context("Failed to generate JWT")
    }

    /// Validate a JWT token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let decoded = decode::<Claims>(token, &self.decoding_key, &validation)
            .context("Invalid or expired token")?;

        debug!("Validated JWT for user {}", decoded.claims.username);

        Ok(decoded.claims)
    }
}
