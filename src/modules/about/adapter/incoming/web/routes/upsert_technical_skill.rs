use actix_web::{put, web, Responder};
use tracing::error;

use crate::about::application::ports::incoming::use_cases::UpsertTechnicalSkillError;
use crate::about::application::ports::outgoing::technical_skill::TechnicalSkillData;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save a technical skill (owner only; the skill is scoped to the caller)
#[utoipa::path(
    put,
    path = "/api/about/skills",
    tag = "about",
    responses(
        (status = 200, description = "Persisted skill"),
        (status = 400, description = "Missing required attribute"),
        (status = 401, description = "Not signed in"),
    )
)]
#[put("/api/about/skills")]
pub async fn upsert_technical_skill_handler(
    user: AuthenticatedUser,
    req: web::Json<TechnicalSkillData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    match data.about.upsert_skill.execute(owner, req.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),

        Err(UpsertTechnicalSkillError::MissingField(field)) => ApiResponse::bad_request(
            "MISSING_FIELD",
            &format!("Missing required field: {}", field),
        ),

        Err(UpsertTechnicalSkillError::RepositoryError(msg)) => {
            error!("Failed to save technical skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::about::application::ports::incoming::use_cases::UpsertTechnicalSkillUseCase;
    use crate::about::domain::entities::{SkillLevel, TechnicalSkill};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};

    #[derive(Clone)]
    struct MockUpsert {
        result: Result<TechnicalSkill, UpsertTechnicalSkillError>,
        seen_owner: Arc<Mutex<Option<UserId>>>,
    }

    #[async_trait]
    impl UpsertTechnicalSkillUseCase for MockUpsert {
        async fn execute(
            &self,
            owner: UserId,
            _data: TechnicalSkillData,
        ) -> Result<TechnicalSkill, UpsertTechnicalSkillError> {
            *self.seen_owner.lock().unwrap() = Some(owner);
            self.result.clone()
        }
    }

    fn skill(owner: Uuid) -> TechnicalSkill {
        TechnicalSkill {
            id: 1,
            name: "Rust".to_string(),
            category: "Backend".to_string(),
            level: SkillLevel::Expert,
            description: None,
            user_id: owner,
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_owner_id_from_token_is_attached() {
        let owner = Uuid::new_v4();
        let seen = Arc::new(Mutex::new(None));
        let state = TestAppStateBuilder::default()
            .with_upsert_skill(MockUpsert {
                result: Ok(skill(owner)),
                seen_owner: Arc::clone(&seen),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(test_token_provider()))
                .service(upsert_technical_skill_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/about/skills")
            .insert_header(bearer_header(owner))
            .set_json(json!({"name": "Rust", "category": "Backend", "level": "expert"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(seen.lock().unwrap().unwrap().value(), owner);
    }

    #[actix_web::test]
    async fn test_missing_field_is_400() {
        let state = TestAppStateBuilder::default()
            .with_upsert_skill(MockUpsert {
                result: Err(UpsertTechnicalSkillError::MissingField("name")),
                seen_owner: Arc::new(Mutex::new(None)),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(test_token_provider()))
                .service(upsert_technical_skill_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/about/skills")
            .insert_header(bearer_header(Uuid::new_v4()))
            .set_json(json!({"name": "", "category": "Backend", "level": "expert"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], json!("MISSING_FIELD"));
    }
}
