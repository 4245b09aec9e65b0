use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::project::domain::entities::{Project, ProjectStatus};

use super::sea_orm_entity::projects::{Column, Entity, Model};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn model_to_entity(model: Model) -> Result<Project, ProjectQueryError> {
    let images: Vec<String> = serde_json::from_value(model.images)
        .map_err(|e| ProjectQueryError::DatabaseError(format!("bad images payload: {}", e)))?;

    Ok(Project {
        id: model.id,
        slug: model.slug,
        title: model.title,
        summary: model.summary,
        content: model.content,
        images,
        video_url: model.video_url,
        technologies: model.technologies,
        tag: model.tag,
        link: model.link,
        featured: model.featured,
        status: ProjectStatus::parse_or_default(&model.status),
        published_at: model.published_at.into(),
        created_at: model.created_at.into(),
    })
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::PublishedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(model_to_entity).collect()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, ProjectQueryError> {
        let found = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        found.map(model_to_entity).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectQueryError> {
        let found = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        found.map(model_to_entity).transpose()
    }
}
