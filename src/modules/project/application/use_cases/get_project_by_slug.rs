use async_trait::async_trait;
use tracing::error;

use crate::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::project::domain::entities::Project;

/// Detail lookup for `/work/{slug}`. Absence and read failure both resolve
/// to None, which the route renders as a standard not-found.
#[async_trait]
pub trait GetProjectBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Option<Project>;
}

pub struct GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectBySlugService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectBySlugUseCase for GetProjectBySlugService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Option<Project> {
        match self.query.find_by_slug(slug).await {
            Ok(found) => found,
            Err(e) => {
                error!("Error fetching project by slug: {}", e);
                None
            }
        }
    }
}
