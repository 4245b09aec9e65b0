use async_trait::async_trait;
use tracing::error;

use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::project::domain::entities::Project;

/// Public listing, newest publication first; fails open to empty.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Project>;
}

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Project> {
        match self.query.list().await {
            Ok(mut projects) => {
                projects.sort_by(|a, b| b.published_at.cmp(&a.published_at));
                projects
            }
            Err(e) => {
                error!("Error fetching projects: {}", e);
                Vec::new()
            }
        }
    }
}
