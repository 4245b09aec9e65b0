use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::about::domain::entities::Introduction;

use super::{AboutQueryError, AboutRepositoryError};

/// Editable fields of the introduction. The fixed singleton id is applied
/// by the repository, never supplied by callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IntroductionData {
    pub name: String,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub discord_handle: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl From<Introduction> for IntroductionData {
    fn from(record: Introduction) -> Self {
        Self {
            name: record.name,
            role: record.role,
            description: record.description,
            avatar_url: record.avatar_url,
            github_url: record.github_url,
            linkedin_url: record.linkedin_url,
            discord_handle: record.discord_handle,
            contact_email: record.contact_email,
        }
    }
}

#[async_trait]
pub trait IntroductionQuery: Send + Sync {
    async fn get(&self) -> Result<Option<Introduction>, AboutQueryError>;
}

#[async_trait]
pub trait IntroductionRepository: Send + Sync {
    /// Insert-or-update the singleton row.
    async fn upsert(&self, data: IntroductionData) -> Result<Introduction, AboutRepositoryError>;

    /// Targeted avatar update, used by the avatar pipeline after an upload.
    async fn set_avatar_url(&self, url: &str) -> Result<(), AboutRepositoryError>;
}
