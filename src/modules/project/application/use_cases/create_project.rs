use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

use crate::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::project::domain::entities::{Project, ProjectStatus};
use crate::project::domain::slug::{is_url_safe, slugify};

//
// ──────────────────────────────────────────────────────────
// Request
// ──────────────────────────────────────────────────────────
//

/// Creation payload as the editor submits it; the slug is optional and
/// derived from the title when absent.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    /// Neither the given slug nor the slugified title is usable.
    InvalidSlug(String),
    SlugAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::InvalidSlug(slug) => write!(f, "invalid slug: {:?}", slug),
            CreateProjectError::SlugAlreadyExists => write!(f, "slug already exists"),
            CreateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, request: CreateProjectRequest)
        -> Result<Project, CreateProjectError>;
}

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: CreateProjectRequest,
    ) -> Result<Project, CreateProjectError> {
        let slug = match request.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_lowercase(),
            _ => slugify(&request.title),
        };

        if !is_url_safe(&slug) {
            return Err(CreateProjectError::InvalidSlug(slug));
        }

        let data = CreateProjectData {
            slug,
            title: request.title,
            summary: request.summary,
            content: request.content,
            images: request.images,
            video_url: request.video_url,
            technologies: request.technologies,
            tag: request.tag,
            link: request.link,
            featured: request.featured,
            status: request.status,
            published_at: request.published_at,
        };

        self.repository.create(data).await.map_err(|e| match e {
            ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
            other => CreateProjectError::RepositoryError(other.to_string()),
        })
    }
}
