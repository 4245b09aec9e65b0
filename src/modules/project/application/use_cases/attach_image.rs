use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::media::application::ports::outgoing::{ObjectStorage, UploadOptions};
use crate::media::domain::storage_key::project_image_key;
use crate::media::domain::upload_policy::ImagePolicy;
use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::project::application::ports::outgoing::project_repository::{
    PatchField, PatchProjectData, ProjectRepository,
};
use crate::project::domain::entities::{Project, MAX_PROJECT_IMAGES};

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub enum AttachImageError {
    ProjectNotFound,
    /// Only slots 0 and 1 exist.
    IndexOutOfRange(usize),
    InvalidImage(String),
    StorageError(String),
    RepositoryError(String),
}

impl fmt::Display for AttachImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachImageError::ProjectNotFound => write!(f, "project not found"),
            AttachImageError::IndexOutOfRange(index) => {
                write!(f, "image slot {} out of range", index)
            }
            AttachImageError::InvalidImage(msg) => write!(f, "invalid image: {}", msg),
            AttachImageError::StorageError(msg) => write!(f, "storage error: {}", msg),
            AttachImageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Uploads an image into one of the project's two gallery slots and stores
/// its public URL at that index.
#[async_trait]
pub trait AttachProjectImageUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        index: usize,
        upload: ImageUpload,
    ) -> Result<Project, AttachImageError>;
}

pub struct AttachProjectImageService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    policy: ImagePolicy,
    storage: Arc<dyn ObjectStorage>,
    query: Q,
    repository: R,
}

impl<Q, R> AttachProjectImageService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(policy: ImagePolicy, storage: Arc<dyn ObjectStorage>, query: Q, repository: R) -> Self {
        Self {
            policy,
            storage,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> AttachProjectImageUseCase for AttachProjectImageService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        index: usize,
        upload: ImageUpload,
    ) -> Result<Project, AttachImageError> {
        if index >= MAX_PROJECT_IMAGES {
            return Err(AttachImageError::IndexOutOfRange(index));
        }

        self.policy
            .check(&upload.content_type, upload.bytes.len())
            .map_err(|e| AttachImageError::InvalidImage(e.to_string()))?;

        let project = self
            .query
            .find_by_id(project_id)
            .await
            .map_err(|e| AttachImageError::RepositoryError(e.to_string()))?
            .ok_or(AttachImageError::ProjectNotFound)?;

        let key = project_image_key(&project.slug, index, &upload.file_name);

        self.storage
            .upload(
                &key,
                upload.bytes,
                &upload.content_type,
                UploadOptions::default(),
            )
            .await
            .map_err(|e| AttachImageError::StorageError(e.to_string()))?;

        let url = self.storage.public_url(&key);

        let mut images = project.images;
        if images.len() <= index {
            images.resize(index + 1, String::new());
        }
        images[index] = url;

        let patch = PatchProjectData {
            images: PatchField::Value(images),
            ..Default::default()
        };

        self.repository
            .patch(project_id, patch)
            .await
            .map_err(|e| AttachImageError::RepositoryError(e.to_string()))
    }
}
