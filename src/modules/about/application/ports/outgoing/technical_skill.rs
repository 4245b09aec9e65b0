use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::about::domain::entities::{SkillLevel, TechnicalSkill};
use crate::auth::domain::entities::UserId;

use super::{AboutQueryError, AboutRepositoryError};

/// Draft shape for the skills editor. Ownership is not part of the draft;
/// the authenticated owner id is attached at submit time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TechnicalSkillData {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<TechnicalSkill> for TechnicalSkillData {
    fn from(record: TechnicalSkill) -> Self {
        Self {
            id: Some(record.id),
            name: record.name,
            category: record.category,
            level: record.level,
            description: record.description,
        }
    }
}

#[async_trait]
pub trait TechnicalSkillQuery: Send + Sync {
    /// `owner = None` lists the whole collection (the public page);
    /// `Some` narrows to one owner's records.
    async fn list(&self, owner: Option<UserId>) -> Result<Vec<TechnicalSkill>, AboutQueryError>;
}

#[async_trait]
pub trait TechnicalSkillRepository: Send + Sync {
    async fn upsert(
        &self,
        owner: UserId,
        data: TechnicalSkillData,
    ) -> Result<TechnicalSkill, AboutRepositoryError>;
}
