pub mod get_introduction;
pub mod get_studies;
pub mod get_technical_skills;
pub mod get_work_experience;
pub mod upload_avatar;
pub mod upsert_introduction;
pub mod upsert_study;
pub mod upsert_technical_skill;
pub mod upsert_work_experience;
