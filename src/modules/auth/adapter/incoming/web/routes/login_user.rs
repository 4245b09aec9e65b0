use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Owner sign-in
///
/// Validates the credentials format during deserialization, then checks them
/// against the owner account. Known backend failures are remapped to stable
/// user-facing copy.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (status = 200, description = "Login successful"),
        (status = 400, description = "Malformed email or too-short password"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Email not confirmed"),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.login.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),

        Err(LoginError::InvalidCredentials) => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::EmailNotConfirmed) => ApiResponse::forbidden(
            "EMAIL_NOT_CONFIRMED",
            "Please confirm your email address before signing in",
        ),

        Err(e) => {
            error!("Login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::auth::application::use_cases::login_user::{LoginUserResponse, LoginUserUseCase};
    use crate::auth::domain::entities::SessionUser;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginUseCase {
        result: Result<LoginUserResponse, LoginError>,
    }

    #[async_trait]
    impl LoginUserUseCase for MockLoginUseCase {
        async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
            self.result.clone()
        }
    }

    fn login_response() -> LoginUserResponse {
        LoginUserResponse {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            user: SessionUser {
                id: Uuid::new_v4(),
                email: "owner@example.com".to_string(),
                email_confirmed: true,
            },
        }
    }

    async fn call(
        use_case: MockLoginUseCase,
        body: Value,
    ) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default().with_login(use_case).build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_login_success() {
        let (status, body) = call(
            MockLoginUseCase {
                result: Ok(login_response()),
            },
            json!({"email": "owner@example.com", "password": "secret-password"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["access_token"], json!("access"));
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials_is_401() {
        let (status, body) = call(
            MockLoginUseCase {
                result: Err(LoginError::InvalidCredentials),
            },
            json!({"email": "owner@example.com", "password": "secret-password"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], json!("INVALID_CREDENTIALS"));
        assert_eq!(body["error"]["message"], json!("Invalid email or password"));
    }

    #[actix_web::test]
    async fn test_login_unconfirmed_email_is_403() {
        let (status, body) = call(
            MockLoginUseCase {
                result: Err(LoginError::EmailNotConfirmed),
            },
            json!({"email": "owner@example.com", "password": "secret-password"}),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], json!("EMAIL_NOT_CONFIRMED"));
    }

    #[actix_web::test]
    async fn test_login_malformed_email_is_rejected_before_use_case() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "not-an-email", "password": "secret-password"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
