pub mod introduction_postgres;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;
pub mod study_postgres;
pub mod technical_skill_postgres;
pub mod work_experience_postgres;
