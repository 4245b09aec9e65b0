use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Read-side projection of an owner account.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub email_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_email(&self, email: &str)
        -> Result<Option<UserQueryResult>, UserQueryError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;
}
