use async_trait::async_trait;
use uuid::Uuid;

use crate::about::application::ports::incoming::use_cases::{
    AvatarUpload, GetIntroductionUseCase, GetStudiesUseCase, GetTechnicalSkillsUseCase,
    GetWorkExperienceUseCase, UploadAvatarError, UploadAvatarUseCase, UpsertIntroductionError,
    UpsertIntroductionUseCase, UpsertStudyError, UpsertStudyUseCase, UpsertTechnicalSkillError,
    UpsertTechnicalSkillUseCase, UpsertWorkExperienceError, UpsertWorkExperienceUseCase,
};
use crate::about::application::ports::outgoing::introduction::IntroductionData;
use crate::about::application::ports::outgoing::study::StudyData;
use crate::about::application::ports::outgoing::technical_skill::TechnicalSkillData;
use crate::about::application::ports::outgoing::work_experience::WorkExperienceData;
use crate::about::domain::entities::{Introduction, Study, TechnicalSkill, WorkExperience};
use crate::auth::application::use_cases::fetch_session::FetchSessionUseCase;
use crate::auth::application::use_cases::login_user::{
    LoginError, LoginRequest, LoginUserResponse, LoginUserUseCase,
};
use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenResponse, RefreshTokenUseCase,
};
use crate::auth::domain::entities::{SessionUser, UserId};
use crate::contact::application::contact_message::ContactMessage;
use crate::contact::application::submit_contact::{SubmitContactError, SubmitContactUseCase};
use crate::project::application::use_cases::attach_image::{
    AttachImageError, AttachProjectImageUseCase, ImageUpload,
};
use crate::project::application::use_cases::clear_image::{
    ClearImageError, ClearProjectImageUseCase,
};
use crate::project::application::use_cases::create_project::{
    CreateProjectError, CreateProjectRequest, CreateProjectUseCase,
};
use crate::project::application::use_cases::delete_project::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::project::application::use_cases::get_project_by_slug::GetProjectBySlugUseCase;
use crate::project::application::use_cases::get_projects::GetProjectsUseCase;
use crate::project::application::use_cases::patch_project::{
    PatchProjectError, PatchProjectUseCase,
};
use crate::project::application::ports::outgoing::project_repository::PatchProjectData;
use crate::project::domain::entities::Project;

// Read stubs answer with empty state; write stubs must be replaced by the
// test that exercises them.

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchSessionUseCase;

#[async_trait]
impl FetchSessionUseCase for StubFetchSessionUseCase {
    async fn execute(&self, _bearer_token: Option<&str>) -> Option<SessionUser> {
        None
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _refresh_token: &str,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetIntroductionUseCase;

#[async_trait]
impl GetIntroductionUseCase for StubGetIntroductionUseCase {
    async fn execute(&self) -> Option<Introduction> {
        None
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertIntroductionUseCase;

#[async_trait]
impl UpsertIntroductionUseCase for StubUpsertIntroductionUseCase {
    async fn execute(
        &self,
        _data: IntroductionData,
    ) -> Result<Introduction, UpsertIntroductionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetWorkExperienceUseCase;

#[async_trait]
impl GetWorkExperienceUseCase for StubGetWorkExperienceUseCase {
    async fn execute(&self) -> Vec<WorkExperience> {
        vec![]
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertWorkExperienceUseCase;

#[async_trait]
impl UpsertWorkExperienceUseCase for StubUpsertWorkExperienceUseCase {
    async fn execute(
        &self,
        _data: WorkExperienceData,
    ) -> Result<WorkExperience, UpsertWorkExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetStudiesUseCase;

#[async_trait]
impl GetStudiesUseCase for StubGetStudiesUseCase {
    async fn execute(&self) -> Vec<Study> {
        vec![]
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertStudyUseCase;

#[async_trait]
impl UpsertStudyUseCase for StubUpsertStudyUseCase {
    async fn execute(&self, _data: StudyData) -> Result<Study, UpsertStudyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTechnicalSkillsUseCase;

#[async_trait]
impl GetTechnicalSkillsUseCase for StubGetTechnicalSkillsUseCase {
    async fn execute(&self) -> Vec<TechnicalSkill> {
        vec![]
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertTechnicalSkillUseCase;

#[async_trait]
impl UpsertTechnicalSkillUseCase for StubUpsertTechnicalSkillUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _data: TechnicalSkillData,
    ) -> Result<TechnicalSkill, UpsertTechnicalSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadAvatarUseCase;

#[async_trait]
impl UploadAvatarUseCase for StubUploadAvatarUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _upload: AvatarUpload,
    ) -> Result<String, UploadAvatarError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Vec<Project> {
        vec![]
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectBySlugUseCase;

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Option<Project> {
        None
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _request: CreateProjectRequest,
    ) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchProjectUseCase;

#[async_trait]
impl PatchProjectUseCase for StubPatchProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _data: PatchProjectData,
    ) -> Result<Project, PatchProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAttachProjectImageUseCase;

#[async_trait]
impl AttachProjectImageUseCase for StubAttachProjectImageUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _index: usize,
        _upload: ImageUpload,
    ) -> Result<Project, AttachImageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubClearProjectImageUseCase;

#[async_trait]
impl ClearProjectImageUseCase for StubClearProjectImageUseCase {
    async fn execute(&self, _project_id: Uuid, _index: usize) -> Result<Project, ClearImageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _message: ContactMessage) -> Result<(), SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}
