use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::about::application::ports::outgoing::introduction::{
    IntroductionData, IntroductionQuery, IntroductionRepository,
};
use crate::about::application::ports::outgoing::{AboutQueryError, AboutRepositoryError};
use crate::about::domain::entities::{Introduction, INTRODUCTION_ID};

use super::sea_orm_entity::introduction::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct IntroductionPostgres {
    db: Arc<DatabaseConnection>,
}

impl IntroductionPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_entity(model: Model) -> Introduction {
    Introduction {
        id: model.id,
        name: model.name,
        role: model.role,
        description: model.description,
        avatar_url: model.avatar_url,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        discord_handle: model.discord_handle,
        contact_email: model.contact_email,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl IntroductionQuery for IntroductionPostgres {
    async fn get(&self) -> Result<Option<Introduction>, AboutQueryError> {
        let found = Entity::find_by_id(INTRODUCTION_ID)
            .one(&*self.db)
            .await
            .map_err(|e| AboutQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(model_to_entity))
    }
}

#[async_trait]
impl IntroductionRepository for IntroductionPostgres {
    async fn upsert(&self, data: IntroductionData) -> Result<Introduction, AboutRepositoryError> {
        // Writes always target the fixed singleton id
        let model = ActiveModel {
            id: Set(INTRODUCTION_ID),
            name: Set(data.name.trim().to_string()),
            role: Set(data.role.trim().to_string()),
            description: Set(data.description),
            avatar_url: Set(data.avatar_url),
            github_url: Set(data.github_url),
            linkedin_url: Set(data.linkedin_url),
            discord_handle: Set(data.discord_handle),
            contact_email: Set(data.contact_email),
            ..Default::default()
        };

        let result = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::Role,
                        Column::Description,
                        Column::AvatarUrl,
                        Column::GithubUrl,
                        Column::LinkedinUrl,
                        Column::DiscordHandle,
                        Column::ContactEmail,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| AboutRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model_to_entity(result))
    }

    async fn set_avatar_url(&self, url: &str) -> Result<(), AboutRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.avatar_url = Set(Some(url.to_string()));

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(INTRODUCTION_ID))
            .exec(&*self.db)
            .await
            .map_err(|e| AboutRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AboutRepositoryError::NotFound);
        }

        Ok(())
    }
}
