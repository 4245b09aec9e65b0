use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::bearer_token;
use crate::auth::domain::entities::SessionUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
}

/// Current session
///
/// Anonymous visitors get `{"user": null}`, never an error - the session
/// lookup fails open just like the section reads.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses((status = 200, description = "Session state, user null when anonymous"))
)]
#[get("/api/auth/session")]
pub async fn fetch_session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = bearer_token(&req);

    let user = data.auth.fetch_session.execute(token.as_deref()).await;

    ApiResponse::success(SessionResponse { user })
}
