use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery};
use crate::auth::domain::entities::SessionUser;

/// Resolves the current session from a bearer token, Supabase
/// `getSession`-style: an absent, expired, or malformed token is an
/// anonymous visitor, never an error. Backend failures are logged and
/// also degrade to anonymous so public pages keep rendering.
#[async_trait]
pub trait FetchSessionUseCase: Send + Sync {
    async fn execute(&self, bearer_token: Option<&str>) -> Option<SessionUser>;
}

pub struct FetchSessionService<Q>
where
    Q: UserQuery,
{
    query: Q,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> FetchSessionService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { query, tokens }
    }
}

#[async_trait]
impl<Q> FetchSessionUseCase for FetchSessionService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, bearer_token: Option<&str>) -> Option<SessionUser> {
        let token = bearer_token?;

        let claims = self.tokens.verify_token(token).ok()?;
        if claims.token_type != "access" {
            return None;
        }

        match self.query.find_by_id(claims.sub).await {
            Ok(Some(user)) => Some(SessionUser {
                id: user.id,
                email: user.email,
                email_confirmed: user.email_confirmed,
            }),
            Ok(None) => None,
            Err(e) => {
                error!("Failed to resolve session user: {}", e);
                None
            }
        }
    }
}
