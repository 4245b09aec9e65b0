use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::domain::entities::{Project, ProjectStatus};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// With #[serde(default)] an omitted field deserializes as Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectData {
    /// Final slug, already derived and validated by the use case.
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub technologies: Vec<String>,
    pub tag: Option<String>,
    pub link: Option<String>,
    pub featured: bool,
    pub status: ProjectStatus,
    /// None lets the database stamp the current time.
    pub published_at: Option<DateTime<Utc>>,
}

/// Patch semantics:
/// - slug is immutable and MUST NOT be patchable
/// - images/technologies: Value(vec) replaces the whole array (no merge)
/// - video_url/tag/link: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct PatchProjectData {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub summary: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub content: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub images: PatchField<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub video_url: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub tag: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub link: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub featured: PatchField<bool>,
    #[serde(default)]
    #[schema(value_type = Option<ProjectStatus>)]
    pub status: PatchField<ProjectStatus>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub published_at: PatchField<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Global unique slug violated at INSERT time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;

    /// Patch without a pre-read by the use case.
    async fn patch(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    /// Hard delete; there is no tombstone to restore from.
    async fn delete(&self, project_id: Uuid) -> Result<(), ProjectRepositoryError>;
}
