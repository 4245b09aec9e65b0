use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Public section reads. All of them fail open: a backend
// outage renders as an empty section, never an error page.
// ──────────────────────────────────────────────────────────
//

/// Introduction (singleton; `data` is null until the seed row is edited)
#[utoipa::path(
    get,
    path = "/api/about/introduction",
    tag = "about",
    responses((status = 200, description = "Introduction record or null"))
)]
#[get("/api/about/introduction")]
pub async fn get_introduction_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.about.get_introduction.execute().await)
}

/// Work experience, most recent start date first
#[utoipa::path(
    get,
    path = "/api/about/experience",
    tag = "about",
    responses((status = 200, description = "Work experience entries"))
)]
#[get("/api/about/experience")]
pub async fn get_work_experience_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.about.get_work_experience.execute().await)
}

/// Studies, most recent start date first
#[utoipa::path(
    get,
    path = "/api/about/studies",
    tag = "about",
    responses((status = 200, description = "Study entries"))
)]
#[get("/api/about/studies")]
pub async fn get_studies_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.about.get_studies.execute().await)
}

/// Technical skills, grouped by category then name
#[utoipa::path(
    get,
    path = "/api/about/skills",
    tag = "about",
    responses((status = 200, description = "Technical skills"))
)]
#[get("/api/about/skills")]
pub async fn get_technical_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.about.get_skills.execute().await)
}
