pub mod get_sections;
pub mod upload_avatar;
pub mod upsert_introduction;
pub mod upsert_study;
pub mod upsert_technical_skill;
pub mod upsert_work_experience;

pub use get_sections::{
    get_introduction_handler, get_studies_handler, get_technical_skills_handler,
    get_work_experience_handler,
};
pub use upload_avatar::upload_avatar_handler;
pub use upsert_introduction::upsert_introduction_handler;
pub use upsert_study::upsert_study_handler;
pub use upsert_technical_skill::upsert_technical_skill_handler;
pub use upsert_work_experience::upsert_work_experience_handler;
