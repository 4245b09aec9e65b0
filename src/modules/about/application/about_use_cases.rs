use std::sync::Arc;

use crate::about::application::ports::incoming::use_cases::{
    GetIntroductionUseCase, GetStudiesUseCase, GetTechnicalSkillsUseCase, GetWorkExperienceUseCase,
    UploadAvatarUseCase, UpsertIntroductionUseCase, UpsertStudyUseCase,
    UpsertTechnicalSkillUseCase, UpsertWorkExperienceUseCase,
};

/// About-page use cases as wired into `AppState`.
#[derive(Clone)]
pub struct AboutUseCases {
    pub get_introduction: Arc<dyn GetIntroductionUseCase>,
    pub upsert_introduction: Arc<dyn UpsertIntroductionUseCase>,
    pub get_work_experience: Arc<dyn GetWorkExperienceUseCase>,
    pub upsert_work_experience: Arc<dyn UpsertWorkExperienceUseCase>,
    pub get_studies: Arc<dyn GetStudiesUseCase>,
    pub upsert_study: Arc<dyn UpsertStudyUseCase>,
    pub get_skills: Arc<dyn GetTechnicalSkillsUseCase>,
    pub upsert_skill: Arc<dyn UpsertTechnicalSkillUseCase>,
    pub upload_avatar: Arc<dyn UploadAvatarUseCase>,
}
