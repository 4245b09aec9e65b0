use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_32ch".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// Token provider to register as app data in route tests.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// Authorization header for a signed-in owner in route tests.
pub fn bearer_header(user_id: Uuid) -> (&'static str, String) {
    let token = test_jwt_service()
        .generate_access_token(user_id, true)
        .expect("test token generation cannot fail");

    ("Authorization", format!("Bearer {}", token))
}
