use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Returns Ok(false) for a well-formed hash that does not match;
    /// Err only for malformed hashes or hasher failures.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
