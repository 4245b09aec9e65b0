use std::sync::Arc;

use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::ports::incoming::use_cases::{
    GetIntroductionUseCase, GetStudiesUseCase, GetTechnicalSkillsUseCase, GetWorkExperienceUseCase,
    UploadAvatarUseCase, UpsertIntroductionUseCase, UpsertStudyUseCase,
    UpsertTechnicalSkillUseCase, UpsertWorkExperienceUseCase,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::fetch_session::FetchSessionUseCase;
use crate::auth::application::use_cases::login_user::LoginUserUseCase;
use crate::auth::application::use_cases::refresh_token::RefreshTokenUseCase;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::submit_contact::SubmitContactUseCase;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::use_cases::attach_image::AttachProjectImageUseCase;
use crate::project::application::use_cases::clear_image::ClearProjectImageUseCase;
use crate::project::application::use_cases::create_project::CreateProjectUseCase;
use crate::project::application::use_cases::delete_project::DeleteProjectUseCase;
use crate::project::application::use_cases::get_project_by_slug::GetProjectBySlugUseCase;
use crate::project::application::use_cases::get_projects::GetProjectsUseCase;
use crate::project::application::use_cases::patch_project::PatchProjectUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub, overriding only
/// what the test under construction cares about.
pub struct TestAppStateBuilder {
    login: Arc<dyn LoginUserUseCase>,
    fetch_session: Arc<dyn FetchSessionUseCase>,
    refresh: Arc<dyn RefreshTokenUseCase>,

    get_introduction: Arc<dyn GetIntroductionUseCase>,
    upsert_introduction: Arc<dyn UpsertIntroductionUseCase>,
    get_work_experience: Arc<dyn GetWorkExperienceUseCase>,
    upsert_work_experience: Arc<dyn UpsertWorkExperienceUseCase>,
    get_studies: Arc<dyn GetStudiesUseCase>,
    upsert_study: Arc<dyn UpsertStudyUseCase>,
    get_skills: Arc<dyn GetTechnicalSkillsUseCase>,
    upsert_skill: Arc<dyn UpsertTechnicalSkillUseCase>,
    upload_avatar: Arc<dyn UploadAvatarUseCase>,

    get_projects: Arc<dyn GetProjectsUseCase>,
    get_by_slug: Arc<dyn GetProjectBySlugUseCase>,
    create_project: Arc<dyn CreateProjectUseCase>,
    patch_project: Arc<dyn PatchProjectUseCase>,
    delete_project: Arc<dyn DeleteProjectUseCase>,
    attach_image: Arc<dyn AttachProjectImageUseCase>,
    clear_image: Arc<dyn ClearProjectImageUseCase>,

    submit_contact: Arc<dyn SubmitContactUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login: Arc::new(StubLoginUseCase),
            fetch_session: Arc::new(StubFetchSessionUseCase),
            refresh: Arc::new(StubRefreshTokenUseCase),

            get_introduction: Arc::new(StubGetIntroductionUseCase),
            upsert_introduction: Arc::new(StubUpsertIntroductionUseCase),
            get_work_experience: Arc::new(StubGetWorkExperienceUseCase),
            upsert_work_experience: Arc::new(StubUpsertWorkExperienceUseCase),
            get_studies: Arc::new(StubGetStudiesUseCase),
            upsert_study: Arc::new(StubUpsertStudyUseCase),
            get_skills: Arc::new(StubGetTechnicalSkillsUseCase),
            upsert_skill: Arc::new(StubUpsertTechnicalSkillUseCase),
            upload_avatar: Arc::new(StubUploadAvatarUseCase),

            get_projects: Arc::new(StubGetProjectsUseCase),
            get_by_slug: Arc::new(StubGetProjectBySlugUseCase),
            create_project: Arc::new(StubCreateProjectUseCase),
            patch_project: Arc::new(StubPatchProjectUseCase),
            delete_project: Arc::new(StubDeleteProjectUseCase),
            attach_image: Arc::new(StubAttachProjectImageUseCase),
            clear_image: Arc::new(StubClearProjectImageUseCase),

            submit_contact: Arc::new(StubSubmitContactUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_fetch_session(mut self, uc: impl FetchSessionUseCase + 'static) -> Self {
        self.fetch_session = Arc::new(uc);
        self
    }

    pub fn with_refresh(mut self, uc: impl RefreshTokenUseCase + 'static) -> Self {
        self.refresh = Arc::new(uc);
        self
    }

    pub fn with_get_introduction(mut self, uc: impl GetIntroductionUseCase + 'static) -> Self {
        self.get_introduction = Arc::new(uc);
        self
    }

    pub fn with_upsert_introduction(
        mut self,
        uc: impl UpsertIntroductionUseCase + 'static,
    ) -> Self {
        self.upsert_introduction = Arc::new(uc);
        self
    }

    pub fn with_get_work_experience(
        mut self,
        uc: impl GetWorkExperienceUseCase + 'static,
    ) -> Self {
        self.get_work_experience = Arc::new(uc);
        self
    }

    pub fn with_upsert_work_experience(
        mut self,
        uc: impl UpsertWorkExperienceUseCase + 'static,
    ) -> Self {
        self.upsert_work_experience = Arc::new(uc);
        self
    }

    pub fn with_get_studies(mut self, uc: impl GetStudiesUseCase + 'static) -> Self {
        self.get_studies = Arc::new(uc);
        self
    }

    pub fn with_upsert_study(mut self, uc: impl UpsertStudyUseCase + 'static) -> Self {
        self.upsert_study = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetTechnicalSkillsUseCase + 'static) -> Self {
        self.get_skills = Arc::new(uc);
        self
    }

    pub fn with_upsert_skill(mut self, uc: impl UpsertTechnicalSkillUseCase + 'static) -> Self {
        self.upsert_skill = Arc::new(uc);
        self
    }

    pub fn with_upload_avatar(mut self, uc: impl UploadAvatarUseCase + 'static) -> Self {
        self.upload_avatar = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.get_projects = Arc::new(uc);
        self
    }

    pub fn with_get_by_slug(mut self, uc: impl GetProjectBySlugUseCase + 'static) -> Self {
        self.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.create_project = Arc::new(uc);
        self
    }

    pub fn with_patch_project(mut self, uc: impl PatchProjectUseCase + 'static) -> Self {
        self.patch_project = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.delete_project = Arc::new(uc);
        self
    }

    pub fn with_attach_image(mut self, uc: impl AttachProjectImageUseCase + 'static) -> Self {
        self.attach_image = Arc::new(uc);
        self
    }

    pub fn with_clear_image(mut self, uc: impl ClearProjectImageUseCase + 'static) -> Self {
        self.clear_image = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: impl SubmitContactUseCase + 'static) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            auth: AuthUseCases {
                login: self.login,
                fetch_session: self.fetch_session,
                refresh: self.refresh,
            },
            about: AboutUseCases {
                get_introduction: self.get_introduction,
                upsert_introduction: self.upsert_introduction,
                get_work_experience: self.get_work_experience,
                upsert_work_experience: self.upsert_work_experience,
                get_studies: self.get_studies,
                upsert_study: self.upsert_study,
                get_skills: self.get_skills,
                upsert_skill: self.upsert_skill,
                upload_avatar: self.upload_avatar,
            },
            project: ProjectUseCases {
                get_list: self.get_projects,
                get_by_slug: self.get_by_slug,
                create: self.create_project,
                patch: self.patch_project,
                delete: self.delete_project,
                attach_image: self.attach_image,
                clear_image: self.clear_image,
            },
            contact: ContactUseCases {
                submit: self.submit_contact,
            },
        }
    }
}
