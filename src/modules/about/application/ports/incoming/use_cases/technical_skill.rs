use async_trait::async_trait;
use std::fmt;

use crate::about::application::ports::outgoing::technical_skill::TechnicalSkillData;
use crate::about::domain::entities::TechnicalSkill;
use crate::auth::domain::entities::UserId;

/// Returns skills grouped for display: category ascending, name ascending
/// within a category. Fails open to an empty list.
#[async_trait]
pub trait GetTechnicalSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<TechnicalSkill>;
}

#[derive(Debug, Clone)]
pub enum UpsertTechnicalSkillError {
    /// Required attribute absent or blank; checked before the port is called.
    MissingField(&'static str),
    RepositoryError(String),
}

impl fmt::Display for UpsertTechnicalSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertTechnicalSkillError::MissingField(field) => {
                write!(f, "missing required field: {}", field)
            }
            UpsertTechnicalSkillError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait UpsertTechnicalSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        data: TechnicalSkillData,
    ) -> Result<TechnicalSkill, UpsertTechnicalSkillError>;
}
