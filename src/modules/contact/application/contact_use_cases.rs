use std::sync::Arc;

use crate::contact::application::submit_contact::SubmitContactUseCase;

/// Contact-form use cases as wired into `AppState`.
#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase>,
}
