use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher as HasherTrait};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Budget-VPS friendly: 4MB memory, 3 iterations, 1 thread.
    pub fn new() -> Self {
        let params = Params::new(4 * 1024, 3, 1, None).expect("Invalid Argon2 params");
        Self { params }
    }

    /// Weak parameters for development and tests.
    pub fn fast() -> Self {
        let params = Params::new(1024, 1, 1, None).expect("Invalid Argon2 params");
        Self { params }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashError::HashingFailed(e.to_string()))
        })
        .await
        .map_err(|e| HashError::HashingFailed(e.to_string()))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let parsed =
                PasswordHash::new(&hash).map_err(|e| HashError::VerificationFailed(e.to_string()))?;

            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(HashError::VerificationFailed(e.to_string())),
            }
        })
        .await
        .map_err(|e| HashError::VerificationFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify_round_trip() {
        let hasher = Argon2Hasher::fast();

        let hash = hasher.hash_password("secret-password").await.unwrap();

        assert!(hasher.verify_password("secret-password", &hash).await.unwrap());
        assert!(!hasher.verify_password("wrong-password", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let hasher = Argon2Hasher::fast();

        let result = hasher.verify_password("secret-password", "garbage").await;

        assert!(matches!(result.unwrap_err(), HashError::VerificationFailed(_)));
    }
}
