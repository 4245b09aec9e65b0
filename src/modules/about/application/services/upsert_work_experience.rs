use async_trait::async_trait;

use crate::about::application::ports::incoming::use_cases::{
    UpsertWorkExperienceError, UpsertWorkExperienceUseCase,
};
use crate::about::application::ports::outgoing::work_experience::{
    WorkExperienceData, WorkExperienceRepository,
};
use crate::about::domain::entities::WorkExperience;

pub struct UpsertWorkExperienceService<R>
where
    R: WorkExperienceRepository,
{
    repository: R,
}

impl<R> UpsertWorkExperienceService<R>
where
    R: WorkExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertWorkExperienceUseCase for UpsertWorkExperienceService<R>
where
    R: WorkExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: WorkExperienceData,
    ) -> Result<WorkExperience, UpsertWorkExperienceError> {
        self.repository
            .upsert(data)
            .await
            .map_err(|e| UpsertWorkExperienceError::RepositoryError(e.to_string()))
    }
}
