use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::project::application::use_cases::delete_project::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project (owner only, irreversible; the client confirms first)
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Project not found"),
    )
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!("Repository error deleting project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
