use async_trait::async_trait;
use tracing::error;

use crate::about::application::ports::incoming::use_cases::GetTechnicalSkillsUseCase;
use crate::about::application::ports::outgoing::technical_skill::TechnicalSkillQuery;
use crate::about::domain::entities::TechnicalSkill;

pub struct GetTechnicalSkillsService<Q>
where
    Q: TechnicalSkillQuery,
{
    query: Q,
}

impl<Q> GetTechnicalSkillsService<Q>
where
    Q: TechnicalSkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTechnicalSkillsUseCase for GetTechnicalSkillsService<Q>
where
    Q: TechnicalSkillQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<TechnicalSkill> {
        match self.query.list(None).await {
            Ok(mut records) => {
                // Category groups alphabetically, names alphabetically inside
                records.sort_by(|a, b| {
                    a.category
                        .cmp(&b.category)
                        .then_with(|| a.name.cmp(&b.name))
                });
                records
            }
            Err(e) => {
                error!("Error fetching technical skills: {}", e);
                Vec::new()
            }
        }
    }
}
