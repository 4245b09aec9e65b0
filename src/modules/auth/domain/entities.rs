use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Owner identity attached to owner-scoped records (skills, uploads).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// The authenticated identity as seen by the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub email_confirmed: bool,
}

/// Full owner account row.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub email_confirmed: bool,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            email: self.email.clone(),
            email_confirmed: self.email_confirmed,
        }
    }
}
