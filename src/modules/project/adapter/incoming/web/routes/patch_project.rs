use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::project::application::ports::outgoing::project_repository::PatchProjectData;
use crate::project::application::use_cases::patch_project::PatchProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Patch a project (owner only; slug is immutable)
#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Updated project"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Project not found"),
    )
)]
#[patch("/api/projects/{id}")]
pub async fn patch_project_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchProjectData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.patch.execute(project_id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchProjectError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Project not found")
        }

        Err(PatchProjectError::RepositoryError(msg)) => {
            error!("Repository error patching project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
