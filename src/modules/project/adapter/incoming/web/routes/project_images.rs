use actix_web::{delete, put, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::project::application::use_cases::attach_image::{AttachImageError, ImageUpload};
use crate::project::application::use_cases::clear_image::ClearImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AttachImageQuery {
    pub filename: String,
}

/// Upload an image into gallery slot 0 or 1 (owner only; raw bytes body)
#[utoipa::path(
    put,
    path = "/api/projects/{id}/images/{index}",
    tag = "projects",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("index" = usize, Path, description = "Gallery slot, 0 or 1"),
    ),
    request_body(content = String, description = "Raw image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Project with the slot filled"),
        (status = 400, description = "Bad slot or not an acceptable image"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Project not found"),
    )
)]
#[put("/api/projects/{id}/images/{index}")]
pub async fn attach_project_image_handler(
    _user: AuthenticatedUser,
    path: web::Path<(Uuid, usize)>,
    query: web::Query<AttachImageQuery>,
    body: web::Bytes,
    http_req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, index) = path.into_inner();

    let content_type = http_req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let upload = ImageUpload {
        file_name: query.into_inner().filename,
        content_type,
        bytes: body.to_vec(),
    };

    match data
        .project
        .attach_image
        .execute(project_id, index, upload)
        .await
    {
        Ok(project) => ApiResponse::success(project),

        Err(AttachImageError::ProjectNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Project not found")
        }

        Err(AttachImageError::IndexOutOfRange(index)) => ApiResponse::bad_request(
            "IMAGE_SLOT_OUT_OF_RANGE",
            &format!("Image slot {} does not exist", index),
        ),

        Err(AttachImageError::InvalidImage(msg)) => {
            ApiResponse::bad_request("INVALID_IMAGE", &msg)
        }

        Err(e) => {
            error!("Failed to attach project image: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Remove the image in a gallery slot (owner only, irreversible)
#[utoipa::path(
    delete,
    path = "/api/projects/{id}/images/{index}",
    tag = "projects",
    params(
        ("id" = Uuid, Path, description = "Project id"),
        ("index" = usize, Path, description = "Gallery slot, 0 or 1"),
    ),
    responses(
        (status = 200, description = "Project with the slot cleared"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Project not found"),
    )
)]
#[delete("/api/projects/{id}/images/{index}")]
pub async fn clear_project_image_handler(
    _user: AuthenticatedUser,
    path: web::Path<(Uuid, usize)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (project_id, index) = path.into_inner();

    match data.project.clear_image.execute(project_id, index).await {
        Ok(project) => ApiResponse::success(project),

        Err(ClearImageError::ProjectNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Project not found")
        }

        Err(ClearImageError::IndexOutOfRange(index)) => ApiResponse::bad_request(
            "IMAGE_SLOT_OUT_OF_RANGE",
            &format!("Image slot {} does not exist", index),
        ),

        Err(e) => {
            error!("Failed to clear project image: {}", e);
            ApiResponse::internal_error()
        }
    }
}
