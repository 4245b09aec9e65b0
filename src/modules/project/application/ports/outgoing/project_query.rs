use async_trait::async_trait;
use uuid::Uuid;

use crate::project::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, ProjectQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectQueryError>;
}
