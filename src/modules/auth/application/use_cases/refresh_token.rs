use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    InvalidToken,
    TokenGenerationFailed(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::InvalidToken => write!(f, "Invalid or expired refresh token"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RefreshTokenError {}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Stateless rotation: a valid refresh token yields a fresh pair.
#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

pub struct RefreshTokenService {
    tokens: Arc<dyn TokenProvider>,
}

impl RefreshTokenService {
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let claims = self
            .tokens
            .verify_token(refresh_token)
            .map_err(|_| RefreshTokenError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(RefreshTokenError::InvalidToken);
        }

        let map_err = |e: TokenError| RefreshTokenError::TokenGenerationFailed(e.to_string());

        Ok(RefreshTokenResponse {
            access_token: self
                .tokens
                .generate_access_token(claims.sub, claims.email_confirmed)
                .map_err(map_err)?,
            refresh_token: self
                .tokens
                .generate_refresh_token(claims.sub, claims.email_confirmed)
                .map_err(map_err)?,
        })
    }
}
