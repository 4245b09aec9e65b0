use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project detail by slug (the `/work/{slug}` page)
#[utoipa::path(
    get,
    path = "/api/work/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project detail"),
        (status = 404, description = "No project with this slug"),
    )
)]
#[get("/api/work/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_by_slug.execute(&slug).await {
        Some(project) => ApiResponse::success(project),
        None => ApiResponse::not_found("NOT_FOUND", "Project not found"),
    }
}
