use async_trait::async_trait;

use crate::about::application::ports::incoming::use_cases::{
    UpsertTechnicalSkillError, UpsertTechnicalSkillUseCase,
};
use crate::about::application::ports::outgoing::technical_skill::{
    TechnicalSkillData, TechnicalSkillRepository,
};
use crate::about::domain::entities::TechnicalSkill;
use crate::auth::domain::entities::UserId;

pub struct UpsertTechnicalSkillService<R>
where
    R: TechnicalSkillRepository,
{
    repository: R,
}

impl<R> UpsertTechnicalSkillService<R>
where
    R: TechnicalSkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertTechnicalSkillUseCase for UpsertTechnicalSkillService<R>
where
    R: TechnicalSkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        data: TechnicalSkillData,
    ) -> Result<TechnicalSkill, UpsertTechnicalSkillError> {
        // Unlike the other sections, skills are checked up front: the
        // backend's NOT NULL errors are too cryptic for the edit dialog.
        if data.name.trim().is_empty() {
            return Err(UpsertTechnicalSkillError::MissingField("name"));
        }

        if data.category.trim().is_empty() {
            return Err(UpsertTechnicalSkillError::MissingField("category"));
        }

        self.repository
            .upsert(owner, data)
            .await
            .map_err(|e| UpsertTechnicalSkillError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::about::application::ports::outgoing::AboutRepositoryError;
    use crate::about::domain::entities::SkillLevel;

    struct EchoRepo {
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl TechnicalSkillRepository for EchoRepo {
        async fn upsert(
            &self,
            owner: UserId,
            data: TechnicalSkillData,
        ) -> Result<TechnicalSkill, AboutRepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(TechnicalSkill {
                id: data.id.unwrap_or(9),
                name: data.name,
                category: data.category,
                level: data.level,
                description: data.description,
                user_id: owner.value(),
                created_at: Utc::now(),
            })
        }
    }

    fn draft() -> TechnicalSkillData {
        TechnicalSkillData {
            id: None,
            name: "Rust".to_string(),
            category: "Backend".to_string(),
            level: SkillLevel::Expert,
            description: Some("Daily driver".to_string()),
        }
    }

    #[tokio::test]
    async fn test_attaches_owner_to_persisted_skill() {
        let owner = UserId::from(Uuid::new_v4());
        let service = UpsertTechnicalSkillService::new(EchoRepo {
            called: Arc::new(AtomicBool::new(false)),
        });

        let saved = service.execute(owner, draft()).await.unwrap();

        assert_eq!(saved.user_id, owner.value());
        assert_eq!(saved.level, SkillLevel::Expert);
    }

    #[tokio::test]
    async fn test_blank_name_fails_before_repository() {
        let called = Arc::new(AtomicBool::new(false));
        let service = UpsertTechnicalSkillService::new(EchoRepo {
            called: Arc::clone(&called),
        });
        let mut data = draft();
        data.name = "   ".to_string();

        let result = service.execute(UserId::from(Uuid::new_v4()), data).await;

        assert!(matches!(
            result.unwrap_err(),
            UpsertTechnicalSkillError::MissingField("name")
        ));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_blank_category_fails_before_repository() {
        let called = Arc::new(AtomicBool::new(false));
        let service = UpsertTechnicalSkillService::new(EchoRepo {
            called: Arc::clone(&called),
        });
        let mut data = draft();
        data.category = String::new();

        let result = service.execute(UserId::from(Uuid::new_v4()), data).await;

        assert!(matches!(
            result.unwrap_err(),
            UpsertTechnicalSkillError::MissingField("category")
        ));
        assert!(!called.load(Ordering::SeqCst));
    }
}
