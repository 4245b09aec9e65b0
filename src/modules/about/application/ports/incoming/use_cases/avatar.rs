use async_trait::async_trait;
use std::fmt;

use crate::auth::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub enum UploadAvatarError {
    InvalidImage(String),
    StorageError(String),
    RepositoryError(String),
}

impl fmt::Display for UploadAvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadAvatarError::InvalidImage(msg) => write!(f, "invalid image: {}", msg),
            UploadAvatarError::StorageError(msg) => write!(f, "storage error: {}", msg),
            UploadAvatarError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Uploads a new avatar and points both the owner profile and the
/// introduction row at its public URL. Returns that URL.
#[async_trait]
pub trait UploadAvatarUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        upload: AvatarUpload,
    ) -> Result<String, UploadAvatarError>;
}
