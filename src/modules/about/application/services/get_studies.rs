use async_trait::async_trait;
use tracing::error;

use crate::about::application::ports::incoming::use_cases::GetStudiesUseCase;
use crate::about::application::ports::outgoing::study::StudyQuery;
use crate::about::domain::entities::Study;

pub struct GetStudiesService<Q>
where
    Q: StudyQuery,
{
    query: Q,
}

impl<Q> GetStudiesService<Q>
where
    Q: StudyQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStudiesUseCase for GetStudiesService<Q>
where
    Q: StudyQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Study> {
        match self.query.list().await {
            Ok(mut records) => {
                records.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                records
            }
            Err(e) => {
                error!("Error fetching studies: {}", e);
                Vec::new()
            }
        }
    }
}
