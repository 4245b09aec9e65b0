use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::about::application::ports::outgoing::work_experience::{
    WorkExperienceData, WorkExperienceQuery, WorkExperienceRepository,
};
use crate::about::application::ports::outgoing::{AboutQueryError, AboutRepositoryError};
use crate::about::domain::entities::WorkExperience;

use super::sea_orm_entity::work_experience::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct WorkExperiencePostgres {
    db: Arc<DatabaseConnection>,
}

impl WorkExperiencePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_entity(model: Model) -> WorkExperience {
    WorkExperience {
        id: model.id,
        company: model.company,
        position: model.position,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        technologies: model.technologies,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl WorkExperienceQuery for WorkExperiencePostgres {
    async fn list(&self) -> Result<Vec<WorkExperience>, AboutQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(|e| AboutQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(model_to_entity).collect())
    }
}

#[async_trait]
impl WorkExperienceRepository for WorkExperiencePostgres {
    async fn upsert(
        &self,
        data: WorkExperienceData,
    ) -> Result<WorkExperience, AboutRepositoryError> {
        let mut model = ActiveModel {
            company: Set(data.company.trim().to_string()),
            position: Set(data.position.trim().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            technologies: Set(data.technologies),
            ..Default::default()
        };

        if let Some(id) = data.id {
            model.id = Set(id);
        }

        let result = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Company,
                        Column::Position,
                        Column::StartDate,
                        Column::EndDate,
                        Column::Description,
                        Column::Technologies,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| AboutRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_entity(result))
    }
}
