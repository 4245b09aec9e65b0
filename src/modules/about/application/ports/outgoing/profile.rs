use async_trait::async_trait;
use uuid::Uuid;

use super::AboutRepositoryError;

/// Write access to the owner account row needed by the avatar pipeline.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn update_avatar_url(
        &self,
        user_id: Uuid,
        url: &str,
    ) -> Result<(), AboutRepositoryError>;
}
