use actix_web::{put, web, Responder};
use tracing::error;

use crate::about::application::ports::incoming::use_cases::UpsertWorkExperienceError;
use crate::about::application::ports::outgoing::work_experience::WorkExperienceData;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save a work experience entry (owner only; id absent = insert)
#[utoipa::path(
    put,
    path = "/api/about/experience",
    tag = "about",
    responses(
        (status = 200, description = "Persisted entry"),
        (status = 401, description = "Not signed in"),
    )
)]
#[put("/api/about/experience")]
pub async fn upsert_work_experience_handler(
    _user: AuthenticatedUser,
    req: web::Json<WorkExperienceData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .about
        .upsert_work_experience
        .execute(req.into_inner())
        .await
    {
        Ok(saved) => ApiResponse::success(saved),

        Err(UpsertWorkExperienceError::RepositoryError(msg)) => {
            error!("Failed to save work experience: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::about::application::ports::incoming::use_cases::UpsertWorkExperienceUseCase;
    use crate::about::domain::entities::WorkExperience;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};

    #[derive(Clone)]
    struct MockUpsert {
        result: Result<WorkExperience, UpsertWorkExperienceError>,
    }

    #[async_trait]
    impl UpsertWorkExperienceUseCase for MockUpsert {
        async fn execute(
            &self,
            _data: WorkExperienceData,
        ) -> Result<WorkExperience, UpsertWorkExperienceError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_authenticated_upsert_returns_persisted_entry() {
        let state = TestAppStateBuilder::default()
            .with_upsert_work_experience(MockUpsert {
                result: Ok(WorkExperience {
                    id: 5,
                    company: "Initech".to_string(),
                    position: "Engineer".to_string(),
                    start_date: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
                    end_date: None,
                    description: "Work".to_string(),
                    technologies: vec![],
                    created_at: Utc::now(),
                }),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(test_token_provider()))
                .service(upsert_work_experience_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/about/experience")
            .insert_header(bearer_header(Uuid::new_v4()))
            .set_json(json!({
                "company": "Initech",
                "position": "Engineer",
                "start_date": "2021-04-01",
                "description": "Work"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], json!(5));
    }

    #[actix_web::test]
    async fn test_anonymous_upsert_is_401() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(test_token_provider()))
                .service(upsert_work_experience_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/about/experience")
            .set_json(json!({
                "company": "Initech",
                "position": "Engineer",
                "start_date": "2021-04-01",
                "description": "Work"
            }))
            .to_request();
        let resp = test::try_call_service(&app, req).await;

        match resp {
            Ok(resp) => assert_eq!(resp.status(), StatusCode::UNAUTHORIZED),
            Err(e) => assert_eq!(
                e.as_response_error().status_code(),
                StatusCode::UNAUTHORIZED
            ),
        }
    }
}
