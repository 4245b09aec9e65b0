use async_trait::async_trait;

use crate::about::application::ports::incoming::use_cases::{UpsertStudyError, UpsertStudyUseCase};
use crate::about::application::ports::outgoing::study::{StudyData, StudyRepository};
use crate::about::domain::entities::Study;

pub struct UpsertStudyService<R>
where
    R: StudyRepository,
{
    repository: R,
}

impl<R> UpsertStudyService<R>
where
    R: StudyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertStudyUseCase for UpsertStudyService<R>
where
    R: StudyRepository + Send + Sync,
{
    async fn execute(&self, data: StudyData) -> Result<Study, UpsertStudyError> {
        self.repository
            .upsert(data)
            .await
            .map_err(|e| UpsertStudyError::RepositoryError(e.to_string()))
    }
}
