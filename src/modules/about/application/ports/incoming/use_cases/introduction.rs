use async_trait::async_trait;
use std::fmt;

use crate::about::application::ports::outgoing::introduction::IntroductionData;
use crate::about::domain::entities::Introduction;

/// Read side fails open: an unreachable backend is indistinguishable from
/// an empty section.
#[async_trait]
pub trait GetIntroductionUseCase: Send + Sync {
    async fn execute(&self) -> Option<Introduction>;
}

#[derive(Debug, Clone)]
pub enum UpsertIntroductionError {
    RepositoryError(String),
}

impl fmt::Display for UpsertIntroductionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertIntroductionError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpsertIntroductionUseCase: Send + Sync {
    async fn execute(&self, data: IntroductionData)
        -> Result<Introduction, UpsertIntroductionError>;
}
