use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use crate::contact::application::contact_message::{ContactForm, ContactMessage};
use crate::contact::application::submit_contact::SubmitContactError;
use crate::AppState;

/// Contact form submission
///
/// This endpoint keeps its own fixed wire contract instead of the standard
/// envelope: `200 {message}`, `400 {error}`, `500 {error}`.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Both emails sent"),
        (status = 400, description = "Validation failure, nothing sent"),
        (status = 500, description = "Provider missing or send failure"),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Re-validate server-side regardless of what the client checked
    let message = match ContactMessage::new(req.into_inner()) {
        Ok(message) => message,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
        }
    };

    match data.contact.submit.execute(message).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Message sent successfully" })),

        Err(SubmitContactError::EmailNotConfigured) => {
            error!("Contact form submitted but no email provider is configured");
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Email service is not configured" }))
        }

        Err(SubmitContactError::SendFailed(msg)) => {
            error!("Contact email delivery failed: {}", msg);
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::contact::application::submit_contact::SubmitContactUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockSubmit {
        result: Result<(), SubmitContactError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SubmitContactUseCase for MockSubmit {
        async fn execute(&self, _message: ContactMessage) -> Result<(), SubmitContactError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    async fn call(mock: MockSubmit, body: Value) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default().with_submit_contact(mock).build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(submit_contact_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_submission_returns_plain_message_body() {
        let (status, body) = call(
            MockSubmit {
                result: Ok(()),
                calls: Arc::new(AtomicUsize::new(0)),
            },
            serde_json::json!({
                "name": "A",
                "email": "a@example.com",
                "subject": "S",
                "message": "M"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], Value::from("Message sent successfully"));
    }

    #[actix_web::test]
    async fn test_bad_email_is_400_and_sends_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (status, body) = call(
            MockSubmit {
                result: Ok(()),
                calls: Arc::clone(&calls),
            },
            serde_json::json!({
                "name": "A",
                "email": "bad",
                "subject": "S",
                "message": "M"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], Value::from("Invalid email format"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_missing_field_is_400() {
        let (status, body) = call(
            MockSubmit {
                result: Ok(()),
                calls: Arc::new(AtomicUsize::new(0)),
            },
            serde_json::json!({
                "name": "",
                "email": "a@example.com",
                "subject": "S",
                "message": "M"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("required"));
    }

    #[actix_web::test]
    async fn test_unconfigured_provider_is_explicit_500() {
        let (status, body) = call(
            MockSubmit {
                result: Err(SubmitContactError::EmailNotConfigured),
                calls: Arc::new(AtomicUsize::new(0)),
            },
            serde_json::json!({
                "name": "A",
                "email": "a@example.com",
                "subject": "S",
                "message": "M"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], Value::from("Email service is not configured"));
    }
}
