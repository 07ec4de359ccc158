//! Password hashing
//! bcrypt is deliberately slow, so both directions run on the blocking pool
//! instead of the request-serving workers.

use anyhow::{Context, Result};

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> Result<String> {
        let password = password.to_owned();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .context("password hashing task panicked")?
            .context("Failed to hash password")
    }

    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .context("password verification task panicked")?
            .context("Failed to verify password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("correct horse").await.unwrap();

        assert_ne!(hash, "correct horse");
        assert!(hasher.verify("correct horse", &hash).await.unwrap());
        assert!(!hasher.verify("battery staple", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash("same").await.unwrap();
        let second = hasher.hash("same").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_error() {
        let hasher = PasswordHasher::new(4);
        assert!(hasher.verify("pw", "not-a-bcrypt-hash").await.is_err());
    }
}
