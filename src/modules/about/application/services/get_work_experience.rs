use async_trait::async_trait;
use tracing::error;

use crate::about::application::ports::incoming::use_cases::GetWorkExperienceUseCase;
use crate::about::application::ports::outgoing::work_experience::WorkExperienceQuery;
use crate::about::domain::entities::WorkExperience;

pub struct GetWorkExperienceService<Q>
where
    Q: WorkExperienceQuery,
{
    query: Q,
}

impl<Q> GetWorkExperienceService<Q>
where
    Q: WorkExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetWorkExperienceUseCase for GetWorkExperienceService<Q>
where
    Q: WorkExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<WorkExperience> {
        match self.query.list().await {
            Ok(mut records) => {
                // Display order regardless of how the rows come back
                records.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                records
            }
            Err(e) => {
                error!("Error fetching work experience: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};

    use crate::about::application::ports::outgoing::AboutQueryError;

    #[derive(Clone)]
    struct MockQuery {
        result: Result<Vec<WorkExperience>, AboutQueryError>,
    }

    #[async_trait]
    impl WorkExperienceQuery for MockQuery {
        async fn list(&self) -> Result<Vec<WorkExperience>, AboutQueryError> {
            self.result.clone()
        }
    }

    fn entry(id: i32, start: (i32, u32, u32)) -> WorkExperience {
        WorkExperience {
            id,
            company: format!("Company {}", id),
            position: "Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: None,
            description: "Work".to_string(),
            technologies: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_orders_reverse_chronologically_for_any_permutation() {
        let a = entry(1, (2019, 3, 1));
        let b = entry(2, (2021, 7, 15));
        let c = entry(3, (2023, 1, 2));

        let permutations = vec![
            vec![a.clone(), b.clone(), c.clone()],
            vec![a.clone(), c.clone(), b.clone()],
            vec![b.clone(), a.clone(), c.clone()],
            vec![b.clone(), c.clone(), a.clone()],
            vec![c.clone(), a.clone(), b.clone()],
            vec![c.clone(), b.clone(), a.clone()],
        ];

        for input in permutations {
            let service = GetWorkExperienceService::new(MockQuery { result: Ok(input) });

            let ordered = service.execute().await;

            let ids: Vec<i32> = ordered.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![3, 2, 1]);
        }
    }

    #[tokio::test]
    async fn test_empty_collection_is_fine() {
        let service = GetWorkExperienceService::new(MockQuery { result: Ok(vec![]) });

        assert!(service.execute().await.is_empty());
    }

    #[tokio::test]
    async fn test_query_error_fails_open_to_empty() {
        let service = GetWorkExperienceService::new(MockQuery {
            result: Err(AboutQueryError::DatabaseError("db down".to_string())),
        });

        assert!(service.execute().await.is_empty());
    }
}
