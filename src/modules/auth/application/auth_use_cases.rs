use std::sync::Arc;

use crate::auth::application::use_cases::fetch_session::FetchSessionUseCase;
use crate::auth::application::use_cases::login_user::LoginUserUseCase;
use crate::auth::application::use_cases::refresh_token::RefreshTokenUseCase;

/// Auth use cases as wired into `AppState`.
#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUserUseCase>,
    pub fetch_session: Arc<dyn FetchSessionUseCase>,
    pub refresh: Arc<dyn RefreshTokenUseCase>,
}
