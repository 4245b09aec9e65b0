use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Rotate tokens
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    responses(
        (status = 200, description = "New token pair"),
        (status = 401, description = "Invalid or expired refresh token"),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.refresh.execute(&req.refresh_token).await {
        Ok(response) => ApiResponse::success(response),

        Err(RefreshTokenError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(RefreshTokenError::TokenGenerationFailed(msg)) => {
            error!("Token rotation failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
