use async_trait::async_trait;
use std::fmt;

use crate::about::application::ports::outgoing::study::StudyData;
use crate::about::domain::entities::Study;

#[async_trait]
pub trait GetStudiesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Study>;
}

#[derive(Debug, Clone)]
pub enum UpsertStudyError {
    RepositoryError(String),
}

impl fmt::Display for UpsertStudyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertStudyError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpsertStudyUseCase: Send + Sync {
    async fn execute(&self, data: StudyData) -> Result<Study, UpsertStudyError>;
}
