use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::about::domain::entities::Study;

use super::{AboutQueryError, AboutRepositoryError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudyData {
    #[serde(default)]
    pub id: Option<i32>,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl From<Study> for StudyData {
    fn from(record: Study) -> Self {
        Self {
            id: Some(record.id),
            institution: record.institution,
            degree: record.degree,
            field: record.field,
            start_date: record.start_date,
            end_date: record.end_date,
            description: record.description,
        }
    }
}

#[async_trait]
pub trait StudyQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Study>, AboutQueryError>;
}

#[async_trait]
pub trait StudyRepository: Send + Sync {
    async fn upsert(&self, data: StudyData) -> Result<Study, AboutRepositoryError>;
}
