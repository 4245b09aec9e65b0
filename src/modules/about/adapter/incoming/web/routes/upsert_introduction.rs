use actix_web::{put, web, Responder};
use tracing::error;

use crate::about::application::ports::incoming::use_cases::UpsertIntroductionError;
use crate::about::application::ports::outgoing::introduction::IntroductionData;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save the introduction (owner only; always targets the singleton row)
#[utoipa::path(
    put,
    path = "/api/about/introduction",
    tag = "about",
    responses(
        (status = 200, description = "Persisted introduction"),
        (status = 401, description = "Not signed in"),
    )
)]
#[put("/api/about/introduction")]
pub async fn upsert_introduction_handler(
    _user: AuthenticatedUser,
    req: web::Json<IntroductionData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.upsert_introduction.execute(req.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),

        Err(UpsertIntroductionError::RepositoryError(msg)) => {
            error!("Failed to save introduction: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
