use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::project::application::use_cases::create_project::{
    CreateProjectError, CreateProjectRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a project (owner only; slug derived from the title when absent)
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 201, description = "Created project"),
        (status = 400, description = "Unusable slug"),
        (status = 401, description = "Not signed in"),
        (status = 409, description = "Slug already exists"),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _user: AuthenticatedUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::InvalidSlug(slug)) => ApiResponse::bad_request(
            "INVALID_SLUG",
            &format!("Cannot derive a usable slug from {:?}", slug),
        ),

        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }

        Err(CreateProjectError::RepositoryError(msg)) => {
            error!("Repository error creating project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
