use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::about::domain::entities::WorkExperience;

use super::{AboutQueryError, AboutRepositoryError};

/// Draft shape for the experience editor. `id: None` inserts a new row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WorkExperienceData {
    #[serde(default)]
    pub id: Option<i32>,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl From<WorkExperience> for WorkExperienceData {
    fn from(record: WorkExperience) -> Self {
        Self {
            id: Some(record.id),
            company: record.company,
            position: record.position,
            start_date: record.start_date,
            end_date: record.end_date,
            description: record.description,
            technologies: record.technologies,
        }
    }
}

#[async_trait]
pub trait WorkExperienceQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<WorkExperience>, AboutQueryError>;
}

#[async_trait]
pub trait WorkExperienceRepository: Send + Sync {
    async fn upsert(
        &self,
        data: WorkExperienceData,
    ) -> Result<WorkExperience, AboutRepositoryError>;
}
