use async_trait::async_trait;
use std::fmt;

use crate::about::application::ports::outgoing::work_experience::WorkExperienceData;
use crate::about::domain::entities::WorkExperience;

/// Returns the collection in display order (most recent start first);
/// fails open to an empty list.
#[async_trait]
pub trait GetWorkExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Vec<WorkExperience>;
}

#[derive(Debug, Clone)]
pub enum UpsertWorkExperienceError {
    RepositoryError(String),
}

impl fmt::Display for UpsertWorkExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertWorkExperienceError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpsertWorkExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        data: WorkExperienceData,
    ) -> Result<WorkExperience, UpsertWorkExperienceError>;
}
