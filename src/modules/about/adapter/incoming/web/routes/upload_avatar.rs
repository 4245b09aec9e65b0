use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::about::application::ports::incoming::use_cases::{AvatarUpload, UploadAvatarError};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadAvatarQuery {
    pub filename: String,
}

#[derive(Serialize)]
pub struct UploadAvatarResponse {
    pub avatar_url: String,
}

/// Upload a new avatar (owner only; raw image bytes as the request body)
#[utoipa::path(
    post,
    path = "/api/about/avatar",
    tag = "about",
    request_body(content = String, description = "Raw image bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Public URL of the stored avatar"),
        (status = 400, description = "Not an acceptable image"),
        (status = 401, description = "Not signed in"),
    )
)]
#[post("/api/about/avatar")]
pub async fn upload_avatar_handler(
    user: AuthenticatedUser,
    query: web::Query<UploadAvatarQuery>,
    body: web::Bytes,
    http_req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let content_type = http_req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let upload = AvatarUpload {
        file_name: query.into_inner().filename,
        content_type,
        bytes: body.to_vec(),
    };

    match data
        .about
        .upload_avatar
        .execute(UserId::from(user.user_id), upload)
        .await
    {
        Ok(url) => ApiResponse::success(UploadAvatarResponse { avatar_url: url }),

        Err(UploadAvatarError::InvalidImage(msg)) => {
            ApiResponse::bad_request("INVALID_IMAGE", &msg)
        }

        Err(e) => {
            error!("Avatar upload failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
