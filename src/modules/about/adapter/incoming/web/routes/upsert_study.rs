use actix_web::{put, web, Responder};
use tracing::error;

use crate::about::application::ports::incoming::use_cases::UpsertStudyError;
use crate::about::application::ports::outgoing::study::StudyData;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save a study entry (owner only; id absent = insert)
#[utoipa::path(
    put,
    path = "/api/about/studies",
    tag = "about",
    responses(
        (status = 200, description = "Persisted entry"),
        (status = 401, description = "Not signed in"),
    )
)]
#[put("/api/about/studies")]
pub async fn upsert_study_handler(
    _user: AuthenticatedUser,
    req: web::Json<StudyData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.upsert_study.execute(req.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),

        Err(UpsertStudyError::RepositoryError(msg)) => {
            error!("Failed to save study: {}", msg);
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

    use crate::about::application::ports::incoming::use_cases::UpsertStudyUseCase;
    use crate::about::domain::entities::Study;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};

    #[derive(Clone)]
    struct MockUpsert {
        result: Result<Study, UpsertStudyError>,
    }

    #[async_trait]
    impl UpsertStudyUseCase for MockUpsert {
        async fn execute(&self, _data: StudyData) -> Result<Study, UpsertStudyError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_authenticated_upsert_succeeds() {
        let state = TestAppStateBuilder::default()
            .with_upsert_study(MockUpsert {
                result: Ok(Study {
                    id: 3,
                    institution: "MIT".to_string(),
                    degree: "MSc".to_string(),
                    field: "CS".to_string(),
                    start_date: NaiveDate::from_ymd_opt(2018, 9, 1).unwrap(),
                    end_date: None,
                    description: "Studied".to_string(),
                    created_at: Utc::now(),
                }),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(test_token_provider()))
                .service(upsert_study_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/about/studies")
            .insert_header(bearer_header(Uuid::new_v4()))
            .set_json(json!({
                "institution": "MIT",
                "degree": "MSc",
                "field": "CS",
                "start_date": "2018-09-01",
                "description": "Studied"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["institution"], json!("MIT"));
    }
}
