use actix_web::{post, Responder};
use serde::Serialize;

use crate::shared::api::ApiResponse;

#[derive(Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

/// Sign out
///
/// Sessions are stateless JWTs; signing out is the client discarding its
/// tokens. The endpoint exists so clients have a single call to end a
/// session symmetrically with login.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Signed out"))
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler() -> impl Responder {
    ApiResponse::success(LogoutResponse {
        message: "Signed out",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_logout_always_succeeds() {
        let app = test::init_service(App::new().service(logout_user_handler)).await;

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], Value::from("Signed out"));
    }
}
