use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::about::application::ports::outgoing::study::{StudyData, StudyQuery, StudyRepository};
use crate::about::application::ports::outgoing::{AboutQueryError, AboutRepositoryError};
use crate::about::domain::entities::Study;

use super::sea_orm_entity::studies::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct StudyPostgres {
    db: Arc<DatabaseConnection>,
}

impl StudyPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_entity(model: Model) -> Study {
    Study {
        id: model.id,
        institution: model.institution,
        degree: model.degree,
        field: model.field,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl StudyQuery for StudyPostgres {
    async fn list(&self) -> Result<Vec<Study>, AboutQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(|e| AboutQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(model_to_entity).collect())
    }
}

#[async_trait]
impl StudyRepository for StudyPostgres {
    async fn upsert(&self, data: StudyData) -> Result<Study, AboutRepositoryError> {
        let mut model = ActiveModel {
            institution: Set(data.institution.trim().to_string()),
            degree: Set(data.degree.trim().to_string()),
            field: Set(data.field.trim().to_string()),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            ..Default::default()
        };

        if let Some(id) = data.id {
            model.id = Set(id);
        }

        let result = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Institution,
                        Column::Degree,
                        Column::Field,
                        Column::StartDate,
                        Column::EndDate,
                        Column::Description,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| AboutRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_entity(result))
    }
}
