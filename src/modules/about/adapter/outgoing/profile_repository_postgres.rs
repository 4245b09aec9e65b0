use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::about::application::ports::outgoing::profile::ProfileRepository;
use crate::about::application::ports::outgoing::AboutRepositoryError;
use crate::auth::adapter::outgoing::sea_orm_entity::profiles::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn update_avatar_url(
        &self,
        user_id: Uuid,
        url: &str,
    ) -> Result<(), AboutRepositoryError> {
        let mut model = <ActiveModel as Default>::default();
        model.avatar_url = Set(Some(url.to_string()));
        model.updated_at = Set(Utc::now().fixed_offset());

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| AboutRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AboutRepositoryError::NotFound);
        }

        Ok(())
    }
}
