use async_trait::async_trait;
use std::sync::Arc;

use crate::about::application::ports::incoming::use_cases::{
    GetIntroductionUseCase, GetStudiesUseCase, GetTechnicalSkillsUseCase, GetWorkExperienceUseCase,
    UpsertIntroductionUseCase, UpsertStudyUseCase, UpsertTechnicalSkillUseCase,
    UpsertWorkExperienceUseCase,
};
use crate::about::application::ports::outgoing::introduction::IntroductionData;
use crate::about::application::ports::outgoing::study::StudyData;
use crate::about::application::ports::outgoing::technical_skill::TechnicalSkillData;
use crate::about::application::ports::outgoing::work_experience::WorkExperienceData;
use crate::about::domain::entities::{Introduction, Study, TechnicalSkill, WorkExperience};
use crate::auth::application::session::SessionManager;
use crate::auth::domain::entities::{SessionUser, UserId};
use crate::editor::application::section_editor::{
    PersistError, SectionEditor, SectionSource, SectionStore,
};
use crate::notification::ToastChannel;

//
// ──────────────────────────────────────────────────────────
// Introduction
// ──────────────────────────────────────────────────────────
//

pub type IntroductionEditor = SectionEditor<Introduction, IntroductionData>;

struct IntroductionSource {
    get: Arc<dyn GetIntroductionUseCase>,
}

#[async_trait]
impl SectionSource<Introduction> for IntroductionSource {
    async fn load(&self) -> Vec<Introduction> {
        self.get.execute().await.into_iter().collect()
    }
}

struct IntroductionStore {
    upsert: Arc<dyn UpsertIntroductionUseCase>,
}

#[async_trait]
impl SectionStore<Introduction, IntroductionData> for IntroductionStore {
    async fn persist(
        &self,
        draft: IntroductionData,
        _owner: &SessionUser,
    ) -> Result<Introduction, PersistError> {
        self.upsert.execute(draft).await.map_err(|e| PersistError {
            message: e.to_string(),
        })
    }
}

pub fn introduction_editor(
    session: Arc<SessionManager>,
    get: Arc<dyn GetIntroductionUseCase>,
    upsert: Arc<dyn UpsertIntroductionUseCase>,
    toasts: ToastChannel,
) -> IntroductionEditor {
    SectionEditor::new(
        "Introduction",
        session,
        Arc::new(IntroductionSource { get }),
        Arc::new(IntroductionStore { upsert }),
        toasts,
    )
}

//
// ──────────────────────────────────────────────────────────
// Work experience
// ──────────────────────────────────────────────────────────
//

pub type WorkExperienceEditor = SectionEditor<WorkExperience, WorkExperienceData>;

struct WorkExperienceSource {
    get: Arc<dyn GetWorkExperienceUseCase>,
}

#[async_trait]
impl SectionSource<WorkExperience> for WorkExperienceSource {
    async fn load(&self) -> Vec<WorkExperience> {
        self.get.execute().await
    }
}

struct WorkExperienceStore {
    upsert: Arc<dyn UpsertWorkExperienceUseCase>,
}

#[async_trait]
impl SectionStore<WorkExperience, WorkExperienceData> for WorkExperienceStore {
    async fn persist(
        &self,
        draft: WorkExperienceData,
        _owner: &SessionUser,
    ) -> Result<WorkExperience, PersistError> {
        self.upsert.execute(draft).await.map_err(|e| PersistError {
            message: e.to_string(),
        })
    }
}

pub fn work_experience_editor(
    session: Arc<SessionManager>,
    get: Arc<dyn GetWorkExperienceUseCase>,
    upsert: Arc<dyn UpsertWorkExperienceUseCase>,
    toasts: ToastChannel,
) -> WorkExperienceEditor {
    SectionEditor::new(
        "Work experience",
        session,
        Arc::new(WorkExperienceSource { get }),
        Arc::new(WorkExperienceStore { upsert }),
        toasts,
    )
}

//
// ──────────────────────────────────────────────────────────
// Studies
// ──────────────────────────────────────────────────────────
//

pub type StudyEditor = SectionEditor<Study, StudyData>;

struct StudySource {
    get: Arc<dyn GetStudiesUseCase>,
}

#[async_trait]
impl SectionSource<Study> for StudySource {
    async fn load(&self) -> Vec<Study> {
        self.get.execute().await
    }
}

struct StudyStore {
    upsert: Arc<dyn UpsertStudyUseCase>,
}

#[async_trait]
impl SectionStore<Study, StudyData> for StudyStore {
    async fn persist(
        &self,
        draft: StudyData,
        _owner: &SessionUser,
    ) -> Result<Study, PersistError> {
        self.upsert.execute(draft).await.map_err(|e| PersistError {
            message: e.to_string(),
        })
    }
}

pub fn study_editor(
    session: Arc<SessionManager>,
    get: Arc<dyn GetStudiesUseCase>,
    upsert: Arc<dyn UpsertStudyUseCase>,
    toasts: ToastChannel,
) -> StudyEditor {
    SectionEditor::new(
        "Study",
        session,
        Arc::new(StudySource { get }),
        Arc::new(StudyStore { upsert }),
        toasts,
    )
}

//
// ──────────────────────────────────────────────────────────
// Technical skills (owner-scoped: the session user id is
// attached to every payload)
// ──────────────────────────────────────────────────────────
//

pub type TechnicalSkillEditor = SectionEditor<TechnicalSkill, TechnicalSkillData>;

struct TechnicalSkillSource {
    get: Arc<dyn GetTechnicalSkillsUseCase>,
}

#[async_trait]
impl SectionSource<TechnicalSkill> for TechnicalSkillSource {
    async fn load(&self) -> Vec<TechnicalSkill> {
        self.get.execute().await
    }
}

struct TechnicalSkillStore {
    upsert: Arc<dyn UpsertTechnicalSkillUseCase>,
}

#[async_trait]
impl SectionStore<TechnicalSkill, TechnicalSkillData> for TechnicalSkillStore {
    async fn persist(
        &self,
        draft: TechnicalSkillData,
        owner: &SessionUser,
    ) -> Result<TechnicalSkill, PersistError> {
        self.upsert
            .execute(UserId::from(owner.id), draft)
            .await
            .map_err(|e| PersistError {
                message: e.to_string(),
            })
    }
}

pub fn technical_skill_editor(
    session: Arc<SessionManager>,
    get: Arc<dyn GetTechnicalSkillsUseCase>,
    upsert: Arc<dyn UpsertTechnicalSkillUseCase>,
    toasts: ToastChannel,
) -> TechnicalSkillEditor {
    SectionEditor::new(
        "Technical skill",
        session,
        Arc::new(TechnicalSkillSource { get }),
        Arc::new(TechnicalSkillStore { upsert }),
        toasts,
    )
}
