use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::project::domain::entities::Project;

#[derive(Debug, Clone)]
pub enum PatchProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for PatchProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchProjectError::NotFound => write!(f, "project not found"),
            PatchProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, PatchProjectError>;
}

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, PatchProjectError> {
        self.repository
            .patch(project_id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => PatchProjectError::NotFound,
                other => PatchProjectError::RepositoryError(other.to_string()),
            })
    }
}
