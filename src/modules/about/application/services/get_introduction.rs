use async_trait::async_trait;
use tracing::error;

use crate::about::application::ports::incoming::use_cases::GetIntroductionUseCase;
use crate::about::application::ports::outgoing::introduction::IntroductionQuery;
use crate::about::domain::entities::Introduction;

pub struct GetIntroductionService<Q>
where
    Q: IntroductionQuery,
{
    query: Q,
}

impl<Q> GetIntroductionService<Q>
where
    Q: IntroductionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetIntroductionUseCase for GetIntroductionService<Q>
where
    Q: IntroductionQuery + Send + Sync,
{
    async fn execute(&self) -> Option<Introduction> {
        match self.query.get().await {
            Ok(record) => record,
            Err(e) => {
                error!("Error fetching introduction: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::about::application::ports::outgoing::AboutQueryError;
    use crate::about::domain::entities::INTRODUCTION_ID;

    #[derive(Clone)]
    struct MockQuery {
        result: Result<Option<Introduction>, AboutQueryError>,
    }

    #[async_trait]
    impl IntroductionQuery for MockQuery {
        async fn get(&self) -> Result<Option<Introduction>, AboutQueryError> {
            self.result.clone()
        }
    }

    fn sample() -> Introduction {
        Introduction {
            id: INTRODUCTION_ID,
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
            description: "Hello".to_string(),
            avatar_url: None,
            github_url: None,
            linkedin_url: None,
            discord_handle: None,
            contact_email: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_returns_singleton_record() {
        let service = GetIntroductionService::new(MockQuery {
            result: Ok(Some(sample())),
        });

        let record = service.execute().await;

        assert_eq!(record.unwrap().name, "Ada");
    }

    #[tokio::test]
    async fn test_missing_record_is_none() {
        let service = GetIntroductionService::new(MockQuery { result: Ok(None) });

        assert!(service.execute().await.is_none());
    }

    #[tokio::test]
    async fn test_query_error_fails_open_to_none() {
        let service = GetIntroductionService::new(MockQuery {
            result: Err(AboutQueryError::DatabaseError("db down".to_string())),
        });

        assert!(service.execute().await.is_none());
    }
}
