use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;

use crate::about::application::ports::outgoing::technical_skill::{
    TechnicalSkillData, TechnicalSkillQuery, TechnicalSkillRepository,
};
use crate::about::application::ports::outgoing::{AboutQueryError, AboutRepositoryError};
use crate::about::domain::entities::{SkillLevel, TechnicalSkill};
use crate::auth::domain::entities::UserId;

use super::sea_orm_entity::technical_skills::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct TechnicalSkillPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechnicalSkillPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_entity(model: Model) -> TechnicalSkill {
    TechnicalSkill {
        id: model.id,
        name: model.name,
        category: model.category,
        level: SkillLevel::parse_or_default(&model.level),
        description: model.description,
        user_id: model.user_id,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl TechnicalSkillQuery for TechnicalSkillPostgres {
    async fn list(&self, owner: Option<UserId>) -> Result<Vec<TechnicalSkill>, AboutQueryError> {
        let mut query = Entity::find()
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Name);

        if let Some(owner) = owner {
            query = query.filter(Column::UserId.eq(owner.value()));
        }

        let rows = query
            .all(&*self.db)
            .await
            .map_err(|e| AboutQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(model_to_entity).collect())
    }
}

#[async_trait]
impl TechnicalSkillRepository for TechnicalSkillPostgres {
    async fn upsert(
        &self,
        owner: UserId,
        data: TechnicalSkillData,
    ) -> Result<TechnicalSkill, AboutRepositoryError> {
        let mut model = ActiveModel {
            name: Set(data.name.trim().to_string()),
            category: Set(data.category.trim().to_string()),
            level: Set(data.level.as_str().to_string()),
            description: Set(data.description),
            user_id: Set(owner.value()),
            ..Default::default()
        };

        if let Some(id) = data.id {
            model.id = Set(id);
        }

        let result = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::Category,
                        Column::Level,
                        Column::Description,
                        Column::UserId,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| AboutRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_entity(result))
    }
}
