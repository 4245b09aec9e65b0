use async_trait::async_trait;

use crate::about::application::ports::incoming::use_cases::{
    UpsertIntroductionError, UpsertIntroductionUseCase,
};
use crate::about::application::ports::outgoing::introduction::{
    IntroductionData, IntroductionRepository,
};
use crate::about::domain::entities::Introduction;

pub struct UpsertIntroductionService<R>
where
    R: IntroductionRepository,
{
    repository: R,
}

impl<R> UpsertIntroductionService<R>
where
    R: IntroductionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertIntroductionUseCase for UpsertIntroductionService<R>
where
    R: IntroductionRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: IntroductionData,
    ) -> Result<Introduction, UpsertIntroductionError> {
        self.repository
            .upsert(data)
            .await
            .map_err(|e| UpsertIntroductionError::RepositoryError(e.to_string()))
    }
}
