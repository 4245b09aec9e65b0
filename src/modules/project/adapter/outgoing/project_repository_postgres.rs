use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchField, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::project::domain::entities::Project;

use super::project_query_postgres::model_to_entity;
use super::sea_orm_entity::projects::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

/// The slug carries a unique index; surface its violation as a distinct
/// error so the editor can tell the user instead of showing a 500.
fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let message = e.to_string();

    if message.contains("duplicate key") || message.contains("idx_projects_slug") {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(message)
    }
}

fn result_from_model(
    model: super::sea_orm_entity::projects::Model,
) -> Result<Project, ProjectRepositoryError> {
    model_to_entity(model).map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(data.slug),
            title: Set(data.title),
            summary: Set(data.summary),
            content: Set(data.content),
            images: Set(to_json(&data.images)?),
            video_url: Set(data.video_url),
            technologies: Set(data.technologies),
            tag: Set(data.tag),
            link: Set(data.link),
            featured: Set(data.featured),
            status: Set(data.status.as_str().to_string()),
            ..Default::default()
        };

        if let Some(published_at) = data.published_at {
            model.published_at = Set(published_at.fixed_offset());
        }

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        result_from_model(result)
    }

    async fn patch(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }

        if let PatchField::Value(summary) = data.summary {
            model.summary = Set(summary);
        }

        if let PatchField::Value(content) = data.content {
            model.content = Set(content);
        }

        if let PatchField::Value(images) = data.images {
            model.images = Set(to_json(&images)?);
        }

        if let PatchField::Value(technologies) = data.technologies {
            model.technologies = Set(technologies);
        }

        match data.video_url {
            PatchField::Unset => {}
            PatchField::Null => model.video_url = Set(None),
            PatchField::Value(url) => model.video_url = Set(Some(url)),
        }

        match data.tag {
            PatchField::Unset => {}
            PatchField::Null => model.tag = Set(None),
            PatchField::Value(tag) => model.tag = Set(Some(tag)),
        }

        match data.link {
            PatchField::Unset => {}
            PatchField::Null => model.link = Set(None),
            PatchField::Value(link) => model.link = Set(Some(link)),
        }

        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        if let PatchField::Value(published_at) = data.published_at {
            model.published_at = Set(published_at.fixed_offset());
        }

        let has_changes = model.title.is_set()
            || model.summary.is_set()
            || model.content.is_set()
            || model.images.is_set()
            || model.technologies.is_set()
            || model.video_url.is_set()
            || model.tag.is_set()
            || model.link.is_set()
            || model.featured.is_set()
            || model.status.is_set()
            || model.published_at.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return result_from_model(result);
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        result_from_model(result)
    }

    async fn delete(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}
