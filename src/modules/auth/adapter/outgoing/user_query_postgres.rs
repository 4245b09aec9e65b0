use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

use super::sea_orm_entity::profiles::{Column, Entity as Profiles, Model};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn model_to_result(model: Model) -> UserQueryResult {
    UserQueryResult {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        avatar_url: model.avatar_url,
        email_confirmed: model.email_confirmed,
        created_at: model.created_at.into(),
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let found = Profiles::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(model_to_result))
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let found = Profiles::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(model_to_result))
    }
}
