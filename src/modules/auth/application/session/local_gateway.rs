use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::auth::application::session::{SessionGateway, SessionGatewayError};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, LoginUserUseCase};
use crate::auth::domain::entities::SessionUser;

/// In-process gateway for the embedded editing layer: signs in through the
/// login use case and keeps the resulting session until sign-out, the same
/// way a browser client persists its session object.
pub struct LocalSessionGateway {
    login: Arc<dyn LoginUserUseCase>,
    current: Mutex<Option<SessionUser>>,
}

impl LocalSessionGateway {
    pub fn new(login: Arc<dyn LoginUserUseCase>) -> Self {
        Self {
            login,
            current: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SessionGateway for LocalSessionGateway {
    async fn current_session(&self) -> Option<SessionUser> {
        self.current.lock().await.clone()
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, SessionGatewayError> {
        let request = LoginRequest::new(email.to_string(), password.to_string())
            .map_err(|e| SessionGatewayError::Backend(e.to_string()))?;

        let response = self.login.execute(request).await.map_err(|e| match e {
            LoginError::InvalidCredentials => SessionGatewayError::InvalidCredentials,
            LoginError::EmailNotConfirmed => SessionGatewayError::EmailNotConfirmed,
            other => SessionGatewayError::Backend(other.to_string()),
        })?;

        let user = response.user;
        *self.current.lock().await = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) {
        *self.current.lock().await = None;
    }
}
