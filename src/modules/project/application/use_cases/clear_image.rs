use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::media::application::ports::outgoing::ObjectStorage;
use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::project::application::ports::outgoing::project_repository::{
    PatchField, PatchProjectData, ProjectRepository,
};
use crate::project::domain::entities::Project;

#[derive(Debug, Clone)]
pub enum ClearImageError {
    ProjectNotFound,
    IndexOutOfRange(usize),
    StorageError(String),
    RepositoryError(String),
}

impl fmt::Display for ClearImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearImageError::ProjectNotFound => write!(f, "project not found"),
            ClearImageError::IndexOutOfRange(index) => {
                write!(f, "image slot {} out of range", index)
            }
            ClearImageError::StorageError(msg) => write!(f, "storage error: {}", msg),
            ClearImageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Deletes the stored object behind an image slot and empties the slot.
/// Deletion is immediate and irreversible.
#[async_trait]
pub trait ClearProjectImageUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid, index: usize) -> Result<Project, ClearImageError>;
}

pub struct ClearProjectImageService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    storage: Arc<dyn ObjectStorage>,
    query: Q,
    repository: R,
}

impl<Q, R> ClearProjectImageService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(storage: Arc<dyn ObjectStorage>, query: Q, repository: R) -> Self {
        Self {
            storage,
            query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> ClearProjectImageUseCase for ClearProjectImageService<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid, index: usize) -> Result<Project, ClearImageError> {
        let project = self
            .query
            .find_by_id(project_id)
            .await
            .map_err(|e| ClearImageError::RepositoryError(e.to_string()))?
            .ok_or(ClearImageError::ProjectNotFound)?;

        if index >= project.images.len() {
            return Err(ClearImageError::IndexOutOfRange(index));
        }

        let url = project.images[index].clone();

        match self.storage.key_for_public_url(&url) {
            Some(key) => {
                self.storage
                    .remove(&[key])
                    .await
                    .map_err(|e| ClearImageError::StorageError(e.to_string()))?;
            }
            // A URL from outside the bucket (or an already-empty slot) has
            // nothing to delete
            None => warn!("Image slot {} holds a foreign URL, clearing only", index),
        }

        let mut images = project.images;
        images[index] = String::new();

        let patch = PatchProjectData {
            images: PatchField::Value(images),
            ..Default::default()
        };

        self.repository
            .patch(project_id, patch)
            .await
            .map_err(|e| ClearImageError::RepositoryError(e.to_string()))
    }
}
