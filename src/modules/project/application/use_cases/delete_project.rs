use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteProjectError::NotFound => write!(f, "project not found"),
            DeleteProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Hard delete. The UI asks for confirmation first; once this runs the row
/// is gone.
#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError>;
}

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<(), DeleteProjectError> {
        self.repository.delete(project_id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            other => DeleteProjectError::RepositoryError(other.to_string()),
        })
    }
}
