pub mod avatar;
pub mod introduction;
pub mod study;
pub mod technical_skill;
pub mod work_experience;

pub use avatar::{AvatarUpload, UploadAvatarError, UploadAvatarUseCase};
pub use introduction::{
    GetIntroductionUseCase, UpsertIntroductionError, UpsertIntroductionUseCase,
};
pub use study::{GetStudiesUseCase, UpsertStudyError, UpsertStudyUseCase};
pub use technical_skill::{
    GetTechnicalSkillsUseCase, UpsertTechnicalSkillError, UpsertTechnicalSkillUseCase,
};
pub use work_experience::{
    GetWorkExperienceUseCase, UpsertWorkExperienceError, UpsertWorkExperienceUseCase,
};
