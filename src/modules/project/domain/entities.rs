use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The image gallery is a fixed two-slot structure (index 0 and 1), not an
/// arbitrary-length list.
pub const MAX_PROJECT_IMAGES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Published,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
            ProjectStatus::Archived => "archived",
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "draft" => ProjectStatus::Draft,
            "published" => ProjectStatus::Published,
            "archived" => ProjectStatus::Archived,
            _ => ProjectStatus::Draft,
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Draft
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    /// Unique URL key, lowercase and URL-safe.
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Long-form markdown body.
    pub content: String,
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub technologies: Vec<String>,
    pub tag: Option<String>,
    pub link: Option<String>,
    pub featured: bool,
    pub status: ProjectStatus,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
